//! Route snapshots and their quantized cache keys.

use lt_core::{GeoPoint, RidePhase};

use crate::RoutePolyline;

// ── RouteKey ──────────────────────────────────────────────────────────────────

/// Metres per degree of latitude on the mean-radius sphere.  Longitude is
/// quantized with the same scale; the key is a coarse identity grid, not a
/// distance metric, so the high-latitude stretch is irrelevant.
const METRES_PER_DEGREE: f64 = 111_195.0;

/// Cache identity of a routing request: origin and destination snapped to a
/// coarse grid, plus the ride phase.
///
/// Snapping means sub-grid GPS jitter maps to the same key and cannot force
/// redundant network fetches.  A phase change always changes the key, which
/// is what forces the pickup-leg → dropoff-leg re-fetch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteKey {
    origin:  (i64, i64),
    dest:    (i64, i64),
    pub phase: RidePhase,
}

impl RouteKey {
    /// Build a key by snapping both endpoints to a `grid_m`-pitch grid.
    pub fn quantized(origin: GeoPoint, dest: GeoPoint, phase: RidePhase, grid_m: f64) -> Self {
        Self {
            origin: snap(origin, grid_m),
            dest:   snap(dest, grid_m),
            phase,
        }
    }
}

#[inline]
fn snap(p: GeoPoint, grid_m: f64) -> (i64, i64) {
    let cells_per_degree = METRES_PER_DEGREE / grid_m;
    (
        (p.lat * cells_per_degree).round() as i64,
        (p.lng * cells_per_degree).round() as i64,
    )
}

// ── Freshness ─────────────────────────────────────────────────────────────────

/// Whether a served snapshot came straight from the routing service or from
/// the cache after a fetch failure.
///
/// Staleness is data quality, not an error: callers keep tracking against a
/// stale snapshot and the UI may badge it, but nothing fails.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Freshness {
    /// Fetched from the routing service for the current request.
    Fresh,
    /// Served from cache because the routing service failed.
    Stale,
}

// ── RouteSnapshot ─────────────────────────────────────────────────────────────

/// One successfully fetched route plus its service-reported totals.
///
/// Owned by [`RouteCache`][crate::RouteCache]; shared read-only with the
/// progress and ETA layers for the lifetime of one routing cycle.  Replaced,
/// never mutated, when a re-route occurs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSnapshot {
    pub polyline: RoutePolyline,
    /// Total route length in metres, as reported by the routing service
    /// (geometric length when the service omits or zeroes its quote).
    pub total_distance_m: f64,
    /// Total expected travel time in seconds, as reported by the service.
    pub total_duration_s: f64,
    /// The phase this route was fetched for (pickup leg vs dropoff leg).
    pub fetched_for: RidePhase,
    /// The quantized request identity this snapshot answers.
    pub key: RouteKey,
    pub freshness: Freshness,
}

impl RouteSnapshot {
    /// Validate a raw service payload into a fresh snapshot.
    ///
    /// # Errors
    ///
    /// [`RouteError::EmptyPolyline`][crate::RouteError::EmptyPolyline] if the
    /// service returned fewer than two points.
    pub fn from_fetched(
        fetched: crate::FetchedRoute,
        phase: RidePhase,
        key: RouteKey,
    ) -> crate::RouteResult<Self> {
        let polyline = RoutePolyline::new(fetched.polyline)?;
        // Some backends zero or omit the total; fall back to the geometry
        // so distance-to-go arithmetic stays usable.
        let total_distance_m = if fetched.distance_m.is_finite() && fetched.distance_m > 0.0 {
            fetched.distance_m
        } else {
            polyline.length_m()
        };
        Ok(RouteSnapshot {
            polyline,
            total_distance_m,
            total_duration_s: fetched.duration_s,
            fetched_for: phase,
            key,
            freshness: Freshness::Fresh,
        })
    }

    /// A copy of this snapshot marked [`Freshness::Stale`].
    pub fn as_stale(&self) -> RouteSnapshot {
        RouteSnapshot {
            freshness: Freshness::Stale,
            ..self.clone()
        }
    }
}
