//! The `LiveRideEngine` state machine.

use log::{debug, warn};

use lt_core::{GeoPoint, Leg, RidePhase, Timestamp, TrackingConfig};
use lt_progress::{EtaEstimator, NoiseFilter, ProgressState, ProgressTracker, SmoothedEta};
use lt_route::{FetchedRoute, RouteCache, RouteResult, RouteSnapshot};
use lt_sites::SiteDetector;

use crate::{
    EngineError, EngineResult, FetchTicket, RideEvent, RouteRequest, RouteStatus, TrackingState,
};

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Mode {
    /// Waiting for the first driver fix.
    Idle,
    /// Actively folding events into tracking state.
    Tracking,
    /// Ride over; every further event re-emits the final state.
    Stopped,
}

/// The result of feeding one event into the engine.
#[derive(Debug)]
pub struct EngineUpdate {
    /// The state to render.  Emitted on **every** transition, including
    /// no-ops like rejected jitter, so collaborators with their own refresh
    /// cadence are never starved.
    pub state: TrackingState,

    /// A route fetch the collaborator should start, if one is needed.
    pub fetch: Option<RouteRequest>,
}

// ── LiveRideEngine ────────────────────────────────────────────────────────────

/// Orchestrates one active ride: noise filtering, route caching, monotone
/// progress, and ETA smoothing, folded into a [`TrackingState`] per event.
///
/// One engine instance exists per active ride and owns all per-ride state;
/// events must be delivered from a single ordered stream (see the crate
/// docs for the concurrency contract).  Create via
/// [`EngineBuilder`][crate::EngineBuilder].
///
/// # Lifecycle
///
/// `Idle` → `Tracking` on the first driver fix (which also issues the
/// initial route request), then `Tracking` → `Stopped` on a terminal phase
/// or [`on_ride_ended`][Self::on_ride_ended].
pub struct LiveRideEngine {
    config: TrackingConfig,

    /// Booking endpoints, as geocoded by the booking flow.
    pickup:  GeoPoint,
    dropoff: GeoPoint,

    sites:     SiteDetector,
    filter:    NoiseFilter,
    tracker:   ProgressTracker,
    estimator: EtaEstimator,
    cache:     RouteCache,

    mode:  Mode,
    phase: RidePhase,

    /// Last accepted driver fix.
    driver: Option<GeoPoint>,

    /// The snapshot currently tracked against (possibly stale-marked).
    route:        Option<RouteSnapshot>,
    progress:     Option<ProgressState>,
    eta:          Option<SmoothedEta>,
    route_status: RouteStatus,

    /// Bumped on every phase change; completions carrying an older epoch
    /// are discarded.
    fetch_epoch: u64,

    /// The one fetch allowed to be outstanding, if any.
    in_flight: Option<FetchTicket>,

    /// Clock of the most recent timestamped event, used when a cache hit
    /// resolves a route outside a driver-fix event.
    last_event_at: Timestamp,
}

impl LiveRideEngine {
    /// Construct an engine for one booking, validating config and endpoints.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Config`] for unusable threshold values.
    /// - [`EngineError::Booking`] for out-of-range pickup/dropoff coordinates.
    pub fn new(
        pickup:  GeoPoint,
        dropoff: GeoPoint,
        sites:   SiteDetector,
        config:  TrackingConfig,
    ) -> EngineResult<Self> {
        config.validate().map_err(EngineError::Config)?;
        let pickup = GeoPoint::validated(pickup.lat, pickup.lng).map_err(EngineError::Booking)?;
        let dropoff =
            GeoPoint::validated(dropoff.lat, dropoff.lng).map_err(EngineError::Booking)?;

        Ok(Self {
            filter:    NoiseFilter::new(config.jitter_floor_m),
            tracker:   ProgressTracker::new(config.reversal_threshold_m),
            estimator: EtaEstimator::new(config.eta_alpha),
            cache:     RouteCache::new(config.cache_grid_m),
            config,
            pickup,
            dropoff,
            sites,
            mode:          Mode::Idle,
            phase:         RidePhase::default(),
            driver:        None,
            route:         None,
            progress:      None,
            eta:           None,
            route_status:  RouteStatus::Pending,
            fetch_epoch:   0,
            in_flight:     None,
            last_event_at: Timestamp::ZERO,
        })
    }

    // ── Entry points ──────────────────────────────────────────────────────

    /// Dispatch one event from the serialized stream.
    pub fn handle(&mut self, event: RideEvent) -> EngineUpdate {
        match event {
            RideEvent::DriverLocation { position, at } => self.on_driver_location(position, at),
            RideEvent::PhaseChange(phase) => self.on_phase_change(phase),
            RideEvent::RouteResolved { ticket, outcome, at } => {
                self.on_route_resolved(ticket, outcome, at)
            }
            RideEvent::RideEnded => self.on_ride_ended(),
        }
    }

    /// Fold one driver GPS fix into the tracking state.
    ///
    /// The first fix moves the engine from `Idle` to `Tracking` and issues
    /// the initial route request.  Sub-jitter fixes re-emit the previous
    /// state unchanged.
    pub fn on_driver_location(&mut self, position: GeoPoint, at: Timestamp) -> EngineUpdate {
        if self.mode == Mode::Stopped {
            return self.emit(None);
        }
        self.last_event_at = at;

        if self.mode == Mode::Idle {
            debug!("first driver fix {position}, tracking starts in phase {}", self.phase);
            self.mode = Mode::Tracking;
        }

        if !self.filter.should_accept(self.driver, position) {
            return self.emit(None);
        }
        self.driver = Some(position);

        let Some(leg) = self.phase.routing_leg() else {
            // Arrived: the driver marker moves, progress and ETA hold.
            return self.emit(None);
        };

        if self.route.is_none() {
            // Initial fetch, or a retry after a completely failed one.
            let fetch = self.resolve_route(position, at);
            return self.emit(fetch);
        }

        self.refresh_against_route(at);

        let wants_refetch = match (self.progress.as_ref(), self.route.as_ref()) {
            (Some(state), Some(route)) => {
                let deviated = state.off_route_m > self.config.deviation_threshold_m;
                let near_end = leg == Leg::ToPickup
                    && state.distance_to_go(route) < self.config.near_end_threshold_m;
                if deviated {
                    debug!("driver {:.1} m off route, requesting re-route", state.off_route_m);
                }
                if near_end {
                    debug!("pickup leg nearly done, requesting route refresh");
                }
                deviated || near_end
            }
            _ => false,
        };

        let fetch = if wants_refetch {
            self.resolve_route(position, at)
        } else {
            None
        };
        self.emit(fetch)
    }

    /// Apply a booking phase change.
    ///
    /// A change between routed legs bumps the fetch epoch (late completions
    /// for the old leg are discarded), resets progress, reseeds the ETA
    /// baseline, and keeps the old snapshot — stale-marked — so tracking
    /// stays live until the new route resolves.
    pub fn on_phase_change(&mut self, phase: RidePhase) -> EngineUpdate {
        if self.mode == Mode::Stopped || phase == self.phase {
            return self.emit(None);
        }

        debug!("phase change {} -> {}", self.phase, phase);
        self.phase = phase;

        if phase.is_terminal() {
            return self.stop();
        }

        // Whatever fetch was serving the previous leg is now meaningless.
        self.fetch_epoch += 1;
        self.in_flight = None;

        if phase.routing_leg().is_none() {
            // Arrived: hold the last snapshot, progress, and ETA; route
            // nothing while the driver waits.
            return self.emit(None);
        }

        self.progress = None;
        // Destination semantics changed, so the EMA reseeds from the next
        // raw sample instead of dragging the old leg's figure along.
        self.eta = None;
        self.route = self.route.take().map(|r| r.as_stale());
        self.route_status = if self.route.is_some() {
            RouteStatus::Stale
        } else {
            RouteStatus::Pending
        };

        let fetch = if self.mode == Mode::Tracking {
            let origin = self.driver.unwrap_or(self.pickup);
            self.resolve_route(origin, self.last_event_at)
        } else {
            None
        };
        self.emit(fetch)
    }

    /// Completion side of a split-phase fetch.
    ///
    /// `ticket` must be the one from the originating [`RouteRequest`]; a
    /// ticket that no longer matches the outstanding fetch (the phase
    /// changed meanwhile) is discarded without touching tracking state.
    pub fn on_route_resolved(
        &mut self,
        ticket:  FetchTicket,
        outcome: RouteResult<FetchedRoute>,
        at:      Timestamp,
    ) -> EngineUpdate {
        if self.mode == Mode::Stopped {
            return self.emit(None);
        }
        if self.in_flight != Some(ticket) {
            debug!("discarding stale route completion (epoch {})", ticket.epoch);
            return self.emit(None);
        }
        self.in_flight = None;
        self.last_event_at = at;

        let validated =
            outcome.and_then(|fetched| RouteSnapshot::from_fetched(fetched, self.phase, ticket.key));

        match validated {
            Ok(snapshot) => {
                debug!(
                    "route resolved for {}: {} points, {:.0} m",
                    self.phase,
                    snapshot.polyline.point_count(),
                    snapshot.total_distance_m
                );
                self.cache.store(snapshot.clone());
                self.route = Some(snapshot);
                self.route_status = RouteStatus::Live;
                self.refresh_against_route(at);
            }
            Err(err) => match self.cache.fallback_for_phase(self.phase) {
                Some(stale) => {
                    warn!("route fetch failed ({err}); tracking against stale route");
                    self.route = Some(stale);
                    self.route_status = RouteStatus::Stale;
                    self.refresh_against_route(at);
                }
                None if self.route.is_some() => {
                    // Still holding the previous leg's snapshot; keep
                    // tracking it rather than blanking the screen.
                    warn!("route fetch failed ({err}); keeping previous snapshot");
                    self.route_status = RouteStatus::Stale;
                }
                None => {
                    warn!("route fetch failed ({err}) with no prior data");
                    self.route_status = RouteStatus::Unavailable;
                }
            },
        }
        self.emit(None)
    }

    /// The ride is over; discard all per-ride state and emit a final update.
    pub fn on_ride_ended(&mut self) -> EngineUpdate {
        if self.mode == Mode::Stopped {
            return self.emit(None);
        }
        self.stop()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Resolve a route for the current leg: cache hit adopts the snapshot
    /// immediately, a miss issues a fetch request unless one is already
    /// outstanding.
    fn resolve_route(&mut self, origin: GeoPoint, at: Timestamp) -> Option<RouteRequest> {
        let leg = self.phase.routing_leg()?;
        let raw_dest = match leg {
            Leg::ToPickup  => self.pickup,
            Leg::ToDropoff => self.dropoff,
        };
        let destination = self.sites.effective_point(raw_dest);
        let key = self.cache.key_for(origin, destination, self.phase);

        if let Some(hit) = self.cache.lookup(key) {
            debug!("route cache hit for {}", self.phase);
            self.route = Some(hit.clone());
            self.route_status = RouteStatus::Live;
            self.refresh_against_route(at);
            return None;
        }

        if self.in_flight.is_some() {
            debug!("route fetch already in flight, suppressing request");
            return None;
        }

        let ticket = FetchTicket { epoch: self.fetch_epoch, key };
        self.in_flight = Some(ticket);
        Some(RouteRequest { ticket, origin, destination, phase: self.phase })
    }

    /// Re-project the driver onto the active snapshot and fold a fresh
    /// ETA/distance sample into the EMA.
    fn refresh_against_route(&mut self, at: Timestamp) {
        if self.phase.routing_leg().is_none() {
            return;
        }
        let (Some(driver), Some(route)) = (self.driver, self.route.as_ref()) else {
            return;
        };

        let state = self.tracker.update(driver, route, self.progress.as_ref());
        let raw_distance = state.distance_to_go(route);
        let raw_eta = if route.total_distance_m > 0.0 {
            route.total_duration_s * raw_distance / route.total_distance_m
        } else {
            0.0
        };
        self.eta = Some(self.estimator.smooth(self.eta.as_ref(), raw_eta, raw_distance, at));
        self.progress = Some(state);
    }

    fn stop(&mut self) -> EngineUpdate {
        debug!("tracking stopped in phase {}", self.phase);
        self.mode = Mode::Stopped;
        self.in_flight = None;
        self.route = None;
        self.progress = None;
        self.eta = None;
        self.emit(None)
    }

    fn emit(&self, fetch: Option<RouteRequest>) -> EngineUpdate {
        EngineUpdate { state: self.current_state(), fetch }
    }

    fn current_state(&self) -> TrackingState {
        // Paths render only when the progress state was computed against the
        // snapshot currently held; after a swap they stay empty until the
        // next refresh re-projects.
        let (covered_path, remaining_path) = match (&self.route, &self.progress) {
            (Some(route), Some(progress)) if progress.route_key == route.key => (
                progress.covered.clone(),
                route
                    .polyline
                    .remaining_suffix(progress.projected_point, progress.seg_index),
            ),
            _ => (Vec::new(), Vec::new()),
        };

        TrackingState {
            driver: self.driver,
            covered_path,
            remaining_path,
            eta_s: self.eta.map(|e| e.eta_s),
            distance_m: self.eta.map(|e| e.distance_m),
            phase: self.phase,
            route_status: self.route_status,
        }
    }
}
