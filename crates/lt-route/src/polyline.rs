//! Validated route geometry.

use lt_core::{cumulative_lengths, project_onto_polyline, GeoPoint, PolylineProjection};

use crate::{RouteError, RouteResult};

/// An ordered sequence of at least two points, as returned by the routing
/// service.  Immutable once constructed; a re-route produces a new value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePolyline {
    points: Vec<GeoPoint>,
}

impl RoutePolyline {
    /// Wrap a point sequence, rejecting anything shorter than two points.
    pub fn new(points: Vec<GeoPoint>) -> RouteResult<Self> {
        if points.len() < 2 {
            return Err(RouteError::EmptyPolyline { got: points.len() });
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of consecutive segments (`point_count - 1`).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Total geometric (haversine) length in metres.
    ///
    /// The routing service's own `distance_m` may differ slightly; this is
    /// the snapshot total whenever the service omits or zeroes its quote.
    pub fn length_m(&self) -> f64 {
        cumulative_lengths(&self.points)
            .last()
            .copied()
            .unwrap_or(0.0)
    }

    /// Project `p` onto this polyline (globally closest segment, lowest
    /// index on ties).
    pub fn project(&self, p: GeoPoint) -> PolylineProjection {
        match project_onto_polyline(p, &self.points) {
            Some(proj) => proj,
            // Construction guarantees at least one segment.
            None => unreachable!("RoutePolyline holds >= 2 points"),
        }
    }

    /// Scalar progress distance of a projection: cumulative route length
    /// from the start through `proj.seg_index`, plus the partial segment.
    pub fn progress_at(&self, proj: &PolylineProjection) -> f64 {
        let cum = cumulative_lengths(&self.points);
        let seg_len = cum[proj.seg_index + 1] - cum[proj.seg_index];
        cum[proj.seg_index] + proj.t * seg_len
    }

    /// The route prefix through the **end** of segment `seg_index`, i.e.
    /// `points[0 ..= seg_index + 1]`.
    ///
    /// Including the full segment that contains the projection avoids
    /// visually truncating the covered path mid-segment.  `seg_index` is
    /// clamped to the last segment.
    pub fn covered_prefix(&self, seg_index: usize) -> Vec<GeoPoint> {
        let last = seg_index.min(self.segment_count() - 1) + 1;
        self.points[..=last].to_vec()
    }

    /// The route suffix from `projection` (the driver's on-route point) to
    /// the end: `[projection, points[seg_index + 1], ..]`.
    pub fn remaining_suffix(&self, projection: GeoPoint, seg_index: usize) -> Vec<GeoPoint> {
        let next = seg_index.min(self.segment_count() - 1) + 1;
        let mut out = Vec::with_capacity(self.points.len() - next + 1);
        out.push(projection);
        out.extend_from_slice(&self.points[next..]);
        out
    }
}
