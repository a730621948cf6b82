//! The engine's output: one coherent tracking state per transition.

use lt_core::{GeoPoint, RidePhase};

/// Quality of the route data behind the current [`TrackingState`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteStatus {
    /// No route data yet; the initial fetch has not resolved.
    Pending,
    /// Tracking against a route fetched for the current request.
    Live,
    /// Tracking against cached data after a fetch failure or phase change;
    /// still usable, the UI may badge it.
    Stale,
    /// The first fetch failed with zero prior data — the one condition the
    /// UI must render explicitly instead of reusing data that never existed.
    Unavailable,
}

/// Snapshot of everything the rendering collaborator needs to draw the trip.
///
/// Recreated, never mutated, on every engine transition.  Paths are empty
/// until a route resolves (and again briefly after a phase change, until the
/// next accepted fix projects onto the retained snapshot).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackingState {
    /// Last accepted driver fix, raw (not projected).
    pub driver: Option<GeoPoint>,

    /// Route prefix the driver has covered, through the full segment
    /// containing the projection.
    pub covered_path: Vec<GeoPoint>,

    /// Route suffix still ahead: the projected point, then the remaining
    /// route vertices.
    pub remaining_path: Vec<GeoPoint>,

    /// Smoothed ETA in seconds; `None` until the first sample.
    pub eta_s: Option<f64>,

    /// Smoothed remaining distance in metres; `None` until the first sample.
    pub distance_m: Option<f64>,

    pub phase: RidePhase,
    pub route_status: RouteStatus,
}
