//! GPS jitter filter.

use log::trace;

use lt_core::GeoPoint;

/// Rejects location updates that represent sub-threshold jitter rather than
/// real movement.
///
/// Stationary consumer GPS hardware scatters fixes a few metres around the
/// true position; accepting those would wiggle progress and could trigger
/// spurious re-routes.  The filter is stateless: given the same `previous`
/// fix it always returns the same answer.
#[derive(Copy, Clone, Debug)]
pub struct NoiseFilter {
    jitter_floor_m: f64,
}

impl NoiseFilter {
    pub fn new(jitter_floor_m: f64) -> Self {
        Self { jitter_floor_m }
    }

    /// `true` if `candidate` should be processed as real movement.
    ///
    /// The first fix (`previous == None`) is always accepted; afterwards a
    /// fix must move at least the jitter floor from the previous **accepted**
    /// fix to pass.
    pub fn should_accept(&self, previous: Option<GeoPoint>, candidate: GeoPoint) -> bool {
        let Some(prev) = previous else {
            return true;
        };
        let moved_m = prev.distance_m(candidate);
        if moved_m < self.jitter_floor_m {
            trace!("dropping jitter fix: moved {moved_m:.2} m < {:.2} m", self.jitter_floor_m);
            return false;
        }
        true
    }
}
