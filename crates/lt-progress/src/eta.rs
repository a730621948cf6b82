//! ETA and distance smoothing.

use log::trace;

use lt_core::Timestamp;

/// The displayed ETA/distance pair.
///
/// Persists across route recalculations — continuity of the displayed number
/// is the whole point.  The engine resets it only on a phase change, where
/// the destination itself (and therefore the quantity's meaning) changed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothedEta {
    /// Displayed time to arrival, in seconds.
    pub eta_s: f64,
    /// Displayed remaining distance, in metres.
    pub distance_m: f64,
    /// Event time of the raw sample last folded in.
    pub last_sample_at: Timestamp,
}

/// Exponential moving average over raw ETA/distance samples.
///
/// Routing backends re-quote ETA with second-to-second noise; a fixed-α EMA
/// damps that while still following real trend changes within a handful of
/// samples.  ETA and distance are smoothed independently.
#[derive(Copy, Clone, Debug)]
pub struct EtaEstimator {
    alpha: f64,
}

impl EtaEstimator {
    /// `alpha` in `(0, 1]`: the weight of each new raw sample.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Fold one raw sample into the displayed value.
    ///
    /// The first sample is displayed as-is.  When a sample is unavailable
    /// (routing failure with no fallback), callers simply do not call
    /// `smooth` and re-emit the previous value unchanged.
    pub fn smooth(
        &self,
        previous: Option<&SmoothedEta>,
        raw_eta_s: f64,
        raw_distance_m: f64,
        at: Timestamp,
    ) -> SmoothedEta {
        match previous {
            None => SmoothedEta {
                eta_s: raw_eta_s,
                distance_m: raw_distance_m,
                last_sample_at: at,
            },
            Some(prev) => {
                trace!(
                    "eta sample {raw_eta_s:.1} s after {} ms gap",
                    at.saturating_since(prev.last_sample_at)
                );
                SmoothedEta {
                    // `old + α(raw − old)` rather than `α·raw + (1−α)·old`:
                    // algebraically identical, but exactly drift-free when
                    // the raw input is constant.
                    eta_s: prev.eta_s + self.alpha * (raw_eta_s - prev.eta_s),
                    distance_m: prev.distance_m + self.alpha * (raw_distance_m - prev.distance_m),
                    last_sample_at: at,
                }
            }
        }
    }
}
