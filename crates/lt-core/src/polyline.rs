//! Pure polyline geometry: projection and containment.
//!
//! # Local-plane approximation
//!
//! Segment projection treats each segment as a straight line in a local
//! equirectangular plane centred on the segment start, with the longitude
//! axis scaled by `cos(lat)`.  At city scale (< ~50 km) the error against a
//! true geodesic projection is well under a metre, and the computation is a
//! handful of multiplications per segment.
//!
//! All functions here are free functions over `&[GeoPoint]` slices; the
//! validated route polyline wrapper lives in `lt-route`.

use crate::geo::{GeoPoint, MEAN_EARTH_RADIUS_M};

// ── Projection results ────────────────────────────────────────────────────────

/// Result of projecting a point onto a single segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentProjection {
    /// The projected point, clamped to the segment (never on the infinite line).
    pub point: GeoPoint,
    /// Position along the segment in `[0.0, 1.0]`.
    pub t: f64,
    /// Distance from the query point to `point`, in metres.
    pub distance_m: f64,
}

/// Result of projecting a point onto a whole polyline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolylineProjection {
    /// Index of the segment containing the projection (`points[i]..points[i+1]`).
    pub seg_index: usize,
    /// Position along that segment in `[0.0, 1.0]`.
    pub t: f64,
    /// The projected point.
    pub point: GeoPoint,
    /// Distance from the query point to the polyline, in metres.
    pub distance_m: f64,
}

// ── Local plane helpers ───────────────────────────────────────────────────────

/// Metres east/north of `origin` in the local equirectangular plane.
#[inline]
fn to_local(origin: GeoPoint, p: GeoPoint) -> (f64, f64) {
    let x = (p.lng - origin.lng).to_radians() * origin.lat.to_radians().cos() * MEAN_EARTH_RADIUS_M;
    let y = (p.lat - origin.lat).to_radians() * MEAN_EARTH_RADIUS_M;
    (x, y)
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Project `p` onto the segment `a → b`.
///
/// `t` is clamped to `[0, 1]`, so the projection always lies on the segment
/// itself.  Degenerate segments (`a == b`) project onto `a` with `t = 0`.
pub fn project_onto_segment(p: GeoPoint, a: GeoPoint, b: GeoPoint) -> SegmentProjection {
    let (bx, by) = to_local(a, b);
    let (px, py) = to_local(a, p);

    let len2 = bx * bx + by * by;
    let t = if len2 <= f64::EPSILON {
        0.0
    } else {
        ((px * bx + py * by) / len2).clamp(0.0, 1.0)
    };

    let point = GeoPoint::new(a.lat + (b.lat - a.lat) * t, a.lng + (b.lng - a.lng) * t);
    let (dx, dy) = (px - t * bx, py - t * by);

    SegmentProjection {
        point,
        t,
        distance_m: (dx * dx + dy * dy).sqrt(),
    }
}

/// Project `p` onto every consecutive segment of `points` and return the
/// globally closest projection.
///
/// Tie-break: on exact distance ties the **lowest** segment index wins, so a
/// projection can never jump ahead spuriously where parallel or overlapping
/// road segments coincide.  Returns `None` for slices with fewer than 2
/// points.
pub fn project_onto_polyline(p: GeoPoint, points: &[GeoPoint]) -> Option<PolylineProjection> {
    if points.len() < 2 {
        return None;
    }

    let mut best: Option<PolylineProjection> = None;
    for (i, pair) in points.windows(2).enumerate() {
        let proj = project_onto_segment(p, pair[0], pair[1]);
        // Strict `<` keeps the earliest segment on exact ties.
        if best.map_or(true, |b| proj.distance_m < b.distance_m) {
            best = Some(PolylineProjection {
                seg_index: i,
                t: proj.t,
                point: proj.point,
                distance_m: proj.distance_m,
            });
        }
    }
    best
}

/// Cumulative haversine length from `points[0]` to each point, in metres.
///
/// `result[0] == 0.0` and `result.last()` is the total polyline length.
/// Returns an empty vec for an empty slice.
pub fn cumulative_lengths(points: &[GeoPoint]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].distance_m(*p);
        }
        out.push(total);
    }
    out
}

// ── Containment ───────────────────────────────────────────────────────────────

/// Standard ray-casting point-in-polygon test.
///
/// The polygon is treated as closed (implicit edge from the last vertex back
/// to the first).  Degenerate polygons with fewer than 3 vertices always
/// return `false`.
pub fn point_in_polygon(p: GeoPoint, polygon: &[GeoPoint]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.lat > p.lat) != (pj.lat > p.lat) {
            let lng_at_lat = pi.lng + (p.lat - pi.lat) * (pj.lng - pi.lng) / (pj.lat - pi.lat);
            if p.lng < lng_at_lat {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
