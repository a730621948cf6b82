//! Per-ride progress state.

use lt_core::GeoPoint;
use lt_route::{RouteKey, RouteSnapshot};

/// The driver's last known position on the active route.
///
/// One instance exists per active ride.  It is produced only by
/// [`ProgressTracker::update`][crate::ProgressTracker::update] and reset
/// whenever the route is recalculated (phase change or large deviation);
/// `route_key` records which snapshot the state was computed against so a
/// swap is detectable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressState {
    /// Segment of the route polyline containing the projection.
    pub seg_index: usize,

    /// The driver's position projected onto the route.
    pub projected_point: GeoPoint,

    /// Scalar progress: route distance from the start to the projection, in
    /// metres.  Never decreases by more than the reversal threshold while
    /// `route_key` is unchanged.
    pub progress_m: f64,

    /// Route prefix covered so far: `polyline[0 ..= seg_index + 1]`.  The
    /// point count never shrinks while `route_key` is unchanged.
    pub covered: Vec<GeoPoint>,

    /// Identity of the snapshot this state was computed against.
    pub route_key: RouteKey,

    /// Distance from the raw fix to the route at the last update, in metres.
    /// The engine compares this against the deviation threshold to decide
    /// when to re-route.
    pub off_route_m: f64,
}

impl ProgressState {
    /// Remaining distance along the route, clamped to zero.
    ///
    /// Uses the service-reported total so the displayed figure agrees with
    /// the ETA the service quoted.
    #[inline]
    pub fn distance_to_go(&self, route: &RouteSnapshot) -> f64 {
        (route.total_distance_m - self.progress_m).max(0.0)
    }
}
