//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude in degrees (WGS-84).  A single
//! active ride holds at most a few thousand points, so there is no reason to
//! trade precision for memory here.  No projection correction is applied
//! beyond the flat-earth approximation in [`crate::polyline`], which is
//! accurate at city scale.

use crate::{CoreError, CoreResult};

/// Mean Earth radius in metres, shared by all distance computations.
pub const MEAN_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Construct a `GeoPoint`, rejecting out-of-range coordinates.
    ///
    /// Raw socket payloads occasionally carry swapped or zeroed fields;
    /// validating at the ingest boundary keeps every later computation total.
    pub fn validated(lat: f64, lng: f64) -> CoreResult<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::InvalidCoordinate(format!(
                "latitude must be within [-90, 90], given: {lat}"
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::InvalidCoordinate(format!(
                "longitude must be within [-180, 180], given: {lng}"
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Haversine great-circle distance in metres.  Deterministic and pure.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        MEAN_EARTH_RADIUS_M * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
