//! The `RouteCache` — quantized-key route cache with stale fallback.

use log::{debug, warn};

use lt_core::{GeoPoint, RidePhase};

use crate::{RouteError, RouteKey, RouteResult, RouteService, RouteSnapshot};

/// Holds the last successfully fetched route, plus the one before it as the
/// rollback target when a re-fetch fails.
///
/// No deeper history is retained: tracking only ever needs "the route we are
/// on" and "the route we can fall back to".
pub struct RouteCache {
    /// Grid pitch used to quantize request keys, in metres.
    grid_m: f64,

    /// The snapshot currently being tracked against.
    current: Option<RouteSnapshot>,

    /// The snapshot `current` evicted; served stale when a fetch fails.
    previous: Option<RouteSnapshot>,
}

impl RouteCache {
    /// Create an empty cache with the given key-quantization pitch.
    pub fn new(grid_m: f64) -> Self {
        Self {
            grid_m,
            current: None,
            previous: None,
        }
    }

    /// The quantized identity of a routing request.
    #[inline]
    pub fn key_for(&self, origin: GeoPoint, dest: GeoPoint, phase: RidePhase) -> RouteKey {
        RouteKey::quantized(origin, dest, phase, self.grid_m)
    }

    /// The cached snapshot answering `key`, if any.
    ///
    /// Only the current snapshot counts as a hit; the previous one exists
    /// solely for failure fallback.
    pub fn lookup(&self, key: RouteKey) -> Option<&RouteSnapshot> {
        self.current.as_ref().filter(|s| s.key == key)
    }

    /// Install a new snapshot, demoting the current one to fallback.
    pub fn store(&mut self, snapshot: RouteSnapshot) {
        self.previous = self.current.take();
        self.current = Some(snapshot);
    }

    /// The most recent snapshot fetched for `phase`, marked stale.
    ///
    /// Checked newest-first; any key within the phase qualifies, since a
    /// slightly different origin is still a usable route shape.
    pub fn fallback_for_phase(&self, phase: RidePhase) -> Option<RouteSnapshot> {
        [self.current.as_ref(), self.previous.as_ref()]
            .into_iter()
            .flatten()
            .find(|s| s.fetched_for == phase)
            .map(RouteSnapshot::as_stale)
    }

    /// Resolve a route for (origin, dest, phase): cache hit, else fetch,
    /// else degrade.
    ///
    /// - Hit on the quantized key: returns the cached snapshot, no network.
    ///   A phase change always changes the key, so it always re-fetches.
    /// - Miss: calls `service`.  Success stores and returns a fresh
    ///   snapshot; failure falls back to any snapshot cached for the same
    ///   phase (marked [`Freshness::Stale`]).
    ///
    /// # Errors
    ///
    /// [`RouteError::Unavailable`] only when the fetch failed **and** no
    /// prior snapshot exists for the phase — the one case the caller must
    /// surface instead of degrading.
    pub fn get_or_fetch(
        &mut self,
        origin: GeoPoint,
        dest: GeoPoint,
        phase: RidePhase,
        service: &dyn RouteService,
    ) -> RouteResult<RouteSnapshot> {
        let key = self.key_for(origin, dest, phase);

        if let Some(hit) = self.lookup(key) {
            debug!("route cache hit for {phase}");
            return Ok(hit.clone());
        }

        debug!("route cache miss for {phase}, fetching {origin} -> {dest}");
        match service.fetch_route(origin, dest) {
            Ok(fetched) => {
                let snapshot = RouteSnapshot::from_fetched(fetched, phase, key)?;
                self.store(snapshot.clone());
                Ok(snapshot)
            }
            Err(err) => match self.fallback_for_phase(phase) {
                Some(stale) => {
                    warn!("route fetch failed ({err}); serving stale route for {phase}");
                    Ok(stale)
                }
                None => Err(RouteError::Unavailable),
            },
        }
    }
}
