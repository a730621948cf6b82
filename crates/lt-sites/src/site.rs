//! Site and point-of-interest records.

use lt_core::GeoPoint;
use serde::{Deserialize, Serialize};

/// A named point inside a site (terminal kerb, gate, rank).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub position: GeoPoint,
}

/// A known venue with a polygon boundary and designated pickup/dropoff
/// points.  Loaded once from static configuration; read-only thereafter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,

    /// Boundary polygon, implicitly closed.  Must have at least 3 vertices.
    pub polygon: Vec<GeoPoint>,

    /// Points of interest inside the polygon.
    #[serde(default)]
    pub pois: Vec<Poi>,

    /// Id of the POI to prefer when substituting a raw coordinate.  Falls
    /// back to the first POI when unset or not found among `pois`.
    #[serde(default)]
    pub preferred_poi: Option<String>,
}

impl Site {
    /// The POI a raw coordinate inside this site should be replaced with:
    /// the designated preferred POI if it exists, else the first POI, else
    /// `None` for sites configured without POIs.
    pub fn preferred_poi(&self) -> Option<&Poi> {
        self.preferred_poi
            .as_deref()
            .and_then(|id| self.pois.iter().find(|p| p.id == id))
            .or_else(|| self.pois.first())
    }
}

/// Axis-aligned bounding box in degrees, used as the cheap pre-filter before
/// the exact polygon test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Tight bounds of `polygon`; `None` for an empty vertex list.
    pub fn of_polygon(polygon: &[GeoPoint]) -> Option<Self> {
        let first = polygon.first()?;
        let mut bbox = BoundingBox {
            min_lat: first.lat,
            min_lng: first.lng,
            max_lat: first.lat,
            max_lng: first.lng,
        };
        for p in &polygon[1..] {
            bbox.min_lat = bbox.min_lat.min(p.lat);
            bbox.min_lng = bbox.min_lng.min(p.lng);
            bbox.max_lat = bbox.max_lat.max(p.lat);
            bbox.max_lng = bbox.max_lng.max(p.lng);
        }
        Some(bbox)
    }
}
