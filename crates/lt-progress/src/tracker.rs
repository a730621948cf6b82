//! The `ProgressTracker` — projection plus monotonicity enforcement.

use log::debug;

use lt_core::GeoPoint;
use lt_route::RouteSnapshot;

use crate::ProgressState;

/// Computes the driver's projected position on the route and enforces the
/// no-backwards rule on the resulting progress distance.
#[derive(Copy, Clone, Debug)]
pub struct ProgressTracker {
    reversal_threshold_m: f64,
}

impl ProgressTracker {
    pub fn new(reversal_threshold_m: f64) -> Self {
        Self { reversal_threshold_m }
    }

    /// Fold one accepted GPS fix into the progress state.
    ///
    /// The candidate progress is the cumulative route length up to the
    /// projection of `driver` onto `route`.  Acceptance rules:
    ///
    /// - No `previous`, or `previous` was computed against a different
    ///   snapshot: accept unconditionally (fresh route, progress restarts).
    /// - Candidate at or ahead of the previous progress: accept.
    /// - Small backward delta (within the reversal threshold): GPS jitter —
    ///   hold the previous projection, progress, and covered path so the
    ///   display cannot flicker backwards.
    /// - Backward delta beyond the threshold: a real reversal — accept the
    ///   candidate as-is, which also resets the floor.
    pub fn update(
        &self,
        driver: GeoPoint,
        route: &RouteSnapshot,
        previous: Option<&ProgressState>,
    ) -> ProgressState {
        let proj = route.polyline.project(driver);
        let candidate_m = route.polyline.progress_at(&proj);

        if let Some(prev) = previous.filter(|p| p.route_key == route.key) {
            let delta = candidate_m - prev.progress_m;

            if delta < -self.reversal_threshold_m {
                debug!(
                    "accepting reversal: progress {:.1} m -> {:.1} m",
                    prev.progress_m, candidate_m
                );
            } else if delta < 0.0 {
                // Backward jitter: hold the floor, but keep the fresh
                // off-route distance so deviation detection stays live.
                return ProgressState {
                    seg_index: prev.seg_index,
                    projected_point: prev.projected_point,
                    progress_m: prev.progress_m,
                    covered: prev.covered.clone(),
                    route_key: prev.route_key,
                    off_route_m: proj.distance_m,
                };
            }
        }

        ProgressState {
            seg_index: proj.seg_index,
            projected_point: proj.point,
            progress_m: candidate_m,
            covered: route.polyline.covered_prefix(proj.seg_index),
            route_key: route.key,
            off_route_m: proj.distance_m,
        }
    }
}
