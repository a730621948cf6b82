//! Tracking configuration.
//!
//! Every threshold the engine applies to raw signals lives here, with
//! defaults inferred from field behaviour of consumer GPS hardware and the
//! routing backend.  Applications tune these per market; tests treat them as
//! parameters, not contracts.

use crate::{CoreError, CoreResult};

/// Tunable thresholds for the live-ride tracking engine.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackingConfig {
    /// GPS fixes closer than this to the previous accepted fix are jitter
    /// and are dropped before they can perturb progress or trigger
    /// re-routing.  Default: 7.5 m.
    pub jitter_floor_m: f64,

    /// A progress decrease larger than this is treated as a legitimate
    /// reversal (driver actually went backwards); smaller decreases are
    /// clamped so displayed progress never flickers.  Default: 50 m.
    pub reversal_threshold_m: f64,

    /// Projection distance from the route beyond which the driver is
    /// considered off-route and a re-route is requested.  Default: 20 m.
    pub deviation_threshold_m: f64,

    /// Remaining route distance below which the current leg is nearly done
    /// and a refresh fetch is requested.  Default: 30 m.
    pub near_end_threshold_m: f64,

    /// Exponential-moving-average factor for ETA/distance smoothing, in
    /// `(0, 1]`.  Higher tracks the raw signal faster; lower damps routing
    /// noise harder.  Default: 0.3.
    pub eta_alpha: f64,

    /// Grid pitch for quantizing route-cache keys.  Origins/destinations
    /// within one grid cell share a cache entry, so sub-grid GPS jitter
    /// cannot force redundant fetches.  Default: 10 m.
    pub cache_grid_m: f64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            jitter_floor_m:        7.5,
            reversal_threshold_m:  50.0,
            deviation_threshold_m: 20.0,
            near_end_threshold_m:  30.0,
            eta_alpha:             0.3,
            cache_grid_m:          10.0,
        }
    }
}

impl TrackingConfig {
    /// Check that all thresholds are usable.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] for non-finite or out-of-range values.
    pub fn validate(&self) -> CoreResult<()> {
        let non_negative = [
            ("jitter_floor_m", self.jitter_floor_m),
            ("reversal_threshold_m", self.reversal_threshold_m),
            ("deviation_threshold_m", self.deviation_threshold_m),
            ("near_end_threshold_m", self.near_end_threshold_m),
            ("cache_grid_m", self.cache_grid_m),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be finite and non-negative, given: {value}"
                )));
            }
        }
        if !self.eta_alpha.is_finite() || !(0.0..=1.0).contains(&self.eta_alpha) || self.eta_alpha == 0.0 {
            return Err(CoreError::Config(format!(
                "eta_alpha must be within (0, 1], given: {}",
                self.eta_alpha
            )));
        }
        if self.cache_grid_m == 0.0 {
            return Err(CoreError::Config(
                "cache_grid_m must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
