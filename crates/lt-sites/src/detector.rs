//! Coordinate-to-site resolution.

use std::collections::HashSet;

use rstar::{RTree, RTreeObject, AABB};

use lt_core::{point_in_polygon, GeoPoint};

use crate::{BoundingBox, Site, SiteError, SiteResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the spatial index: a site's bounding box plus its
/// position in configuration order.
#[derive(Clone)]
struct SiteEntry {
    bbox: AABB<[f64; 2]>, // [lat, lng]
    index: usize,
}

impl RTreeObject for SiteEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bbox
    }
}

// ── SiteDetector ──────────────────────────────────────────────────────────────

/// Resolves coordinates to configured sites.
///
/// Lookup is a two-stage test: the R-tree returns every site whose bounding
/// box contains the point (cheap), then the exact ray-casting polygon test
/// decides membership.
///
/// # Tie-break
///
/// When site polygons overlap, the site that appears **first in
/// configuration order** wins.  This is a policy choice, not geometry:
/// operators order the configuration accordingly.
pub struct SiteDetector {
    sites: Vec<Site>,
    index: RTree<SiteEntry>,
}

impl SiteDetector {
    /// Build a detector over `sites`, validating each record.
    ///
    /// # Errors
    ///
    /// - [`SiteError::EmptyPolygon`] for a polygon with fewer than 3 vertices.
    /// - [`SiteError::DuplicateSite`] for repeated site ids.
    pub fn new(sites: Vec<Site>) -> SiteResult<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(sites.len());
        let mut entries = Vec::with_capacity(sites.len());

        for (i, site) in sites.iter().enumerate() {
            if site.polygon.len() < 3 {
                return Err(SiteError::EmptyPolygon { site: site.id.clone() });
            }
            if !seen.insert(&site.id) {
                return Err(SiteError::DuplicateSite(site.id.clone()));
            }
            // Polygon is non-empty here, so the bbox always exists.
            let bbox = BoundingBox::of_polygon(&site.polygon)
                .ok_or_else(|| SiteError::EmptyPolygon { site: site.id.clone() })?;
            entries.push(SiteEntry {
                bbox: AABB::from_corners([bbox.min_lat, bbox.min_lng], [bbox.max_lat, bbox.max_lng]),
                index: i,
            });
        }

        Ok(Self {
            sites,
            index: RTree::bulk_load(entries),
        })
    }

    /// Detector with no configured sites; `resolve` always returns `None`.
    pub fn empty() -> Self {
        Self {
            sites: Vec::new(),
            index: RTree::new(),
        }
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// The site whose polygon contains `p`, if any.
    ///
    /// Overlapping matches resolve to the lowest configuration index (see
    /// the type-level tie-break note).
    pub fn resolve(&self, p: GeoPoint) -> Option<&Site> {
        self.index
            .locate_in_envelope_intersecting(&AABB::from_point([p.lat, p.lng]))
            .filter(|entry| point_in_polygon(p, &self.sites[entry.index].polygon))
            .map(|entry| entry.index)
            .min()
            .map(|i| &self.sites[i])
    }

    /// Substitute `raw` with the containing site's preferred POI position,
    /// or return it unchanged when no site (or no POI) applies.
    pub fn effective_point(&self, raw: GeoPoint) -> GeoPoint {
        self.resolve(raw)
            .and_then(Site::preferred_poi)
            .map(|poi| poi.position)
            .unwrap_or(raw)
    }
}
