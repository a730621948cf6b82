//! Fluent builder for constructing a [`LiveRideEngine`].

use lt_core::{GeoPoint, TrackingConfig};
use lt_sites::SiteDetector;

use crate::{EngineResult, LiveRideEngine};

/// Fluent builder for [`LiveRideEngine`].
///
/// # Required inputs
///
/// - `pickup` / `dropoff` — the booking endpoints, as geocoded.
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                  |
/// |--------------|--------------------------|
/// | `.sites(d)`  | `SiteDetector::empty()`  |
/// | `.config(c)` | `TrackingConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let sites = SiteDetector::new(load_sites_json(path)?)?;
/// let mut engine = EngineBuilder::new(pickup, dropoff)
///     .sites(sites)
///     .config(TrackingConfig::default())
///     .build()?;
/// let update = engine.on_driver_location(fix, at);
/// ```
pub struct EngineBuilder {
    pickup:  GeoPoint,
    dropoff: GeoPoint,
    sites:   Option<SiteDetector>,
    config:  Option<TrackingConfig>,
}

impl EngineBuilder {
    /// Create a builder for one booking.
    pub fn new(pickup: GeoPoint, dropoff: GeoPoint) -> Self {
        Self {
            pickup,
            dropoff,
            sites:  None,
            config: None,
        }
    }

    /// Supply the site detector used to substitute preferred POIs for raw
    /// booking coordinates.
    ///
    /// If not called, no site resolution happens and raw coordinates are
    /// routed to as-is.
    pub fn sites(mut self, sites: SiteDetector) -> Self {
        self.sites = Some(sites);
        self
    }

    /// Override the tracking thresholds (validated in `build`).
    pub fn config(mut self, config: TrackingConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate inputs and return a ready engine in the `Idle` state.
    pub fn build(self) -> EngineResult<LiveRideEngine> {
        LiveRideEngine::new(
            self.pickup,
            self.dropoff,
            self.sites.unwrap_or_else(SiteDetector::empty),
            self.config.unwrap_or_default(),
        )
    }
}
