//! Unit tests for lt-core.

use crate::geo::GeoPoint;
use crate::polyline::{
    cumulative_lengths, point_in_polygon, project_onto_polyline, project_onto_segment,
};
use crate::{CoreError, RidePhase, Timestamp, TrackingConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pt(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng)
}

/// Unit square in degrees around the origin: (0,0) → (1,1).
fn unit_square() -> Vec<GeoPoint> {
    vec![pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0), pt(1.0, 0.0)]
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geo_point {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = pt(37.7749, -122.4194);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 1° of latitude ≈ 111.19 km on the mean-radius sphere.
        let d = pt(0.0, 0.0).distance_m(pt(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn san_francisco_to_los_angeles() {
        let sf = pt(37.7749, -122.4194);
        let la = pt(34.0522, -118.2437);
        let d = sf.distance_m(la);
        assert!((d - 559_000.0).abs() < 2_000.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = pt(37.7749, -122.4194);
        let b = pt(37.7793, -122.4192);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn validated_rejects_out_of_range() {
        assert!(GeoPoint::validated(91.0, 0.0).is_err());
        assert!(GeoPoint::validated(-91.0, 0.0).is_err());
        assert!(GeoPoint::validated(0.0, 181.0).is_err());
        assert!(GeoPoint::validated(0.0, -181.0).is_err());
        assert!(GeoPoint::validated(37.7749, -122.4194).is_ok());
    }
}

// ── Segment projection ────────────────────────────────────────────────────────

#[cfg(test)]
mod segment_projection {
    use super::*;

    #[test]
    fn midpoint_projects_with_half_t() {
        let a = pt(0.0, 0.0);
        let b = pt(0.0, 0.01);
        let proj = project_onto_segment(pt(0.0001, 0.005), a, b);
        assert!((proj.t - 0.5).abs() < 1e-3, "t = {}", proj.t);
        // ~11 m north of the segment.
        assert!((proj.distance_m - 11.1).abs() < 0.5, "d = {}", proj.distance_m);
    }

    #[test]
    fn t_clamps_before_segment_start() {
        let a = pt(0.0, 0.0);
        let b = pt(0.0, 0.01);
        let proj = project_onto_segment(pt(0.0, -0.01), a, b);
        assert_eq!(proj.t, 0.0);
        assert_eq!(proj.point, a);
    }

    #[test]
    fn t_clamps_after_segment_end() {
        let a = pt(0.0, 0.0);
        let b = pt(0.0, 0.01);
        let proj = project_onto_segment(pt(0.0, 0.02), a, b);
        assert_eq!(proj.t, 1.0);
        assert_eq!(proj.point, b);
    }

    #[test]
    fn degenerate_segment_projects_onto_start() {
        let a = pt(10.0, 10.0);
        let proj = project_onto_segment(pt(10.001, 10.0), a, a);
        assert_eq!(proj.t, 0.0);
        assert_eq!(proj.point, a);
        assert!(proj.distance_m > 0.0);
    }
}

// ── Polyline projection ───────────────────────────────────────────────────────

#[cfg(test)]
mod polyline_projection {
    use super::*;

    #[test]
    fn too_short_polyline_returns_none() {
        assert!(project_onto_polyline(pt(0.0, 0.0), &[]).is_none());
        assert!(project_onto_polyline(pt(0.0, 0.0), &[pt(1.0, 1.0)]).is_none());
    }

    #[test]
    fn driver_at_route_start() {
        // Scenario from the routing backend's reference trace.
        let route = [
            pt(37.7749, -122.4194),
            pt(37.7750, -122.4193),
            pt(37.7751, -122.4192),
        ];
        let proj = project_onto_polyline(pt(37.7749, -122.4194), &route).unwrap();
        assert_eq!(proj.seg_index, 0);
        assert!(proj.t < 1e-9, "t = {}", proj.t);
        assert!(proj.distance_m < 1e-6, "d = {}", proj.distance_m);
    }

    #[test]
    fn picks_globally_closest_segment() {
        // L-shaped route; query point hugs the second segment.
        let route = [pt(0.0, 0.0), pt(0.0, 0.01), pt(0.01, 0.01)];
        let proj = project_onto_polyline(pt(0.005, 0.0099), &route).unwrap();
        assert_eq!(proj.seg_index, 1);
    }

    #[test]
    fn exact_tie_prefers_lowest_index() {
        // The same segment traversed twice: both pass at distance 0.
        let route = [pt(0.0, 0.0), pt(0.0, 0.01), pt(0.0, 0.0), pt(0.0, 0.01)];
        let proj = project_onto_polyline(pt(0.0, 0.005), &route).unwrap();
        assert_eq!(proj.seg_index, 0);
    }

    #[test]
    fn cumulative_lengths_monotone() {
        let route = [pt(0.0, 0.0), pt(0.0, 0.01), pt(0.01, 0.01)];
        let cum = cumulative_lengths(&route);
        assert_eq!(cum.len(), 3);
        assert_eq!(cum[0], 0.0);
        assert!(cum[1] > 0.0 && cum[2] > cum[1]);
        // Total equals the pairwise haversine sum.
        let total = route[0].distance_m(route[1]) + route[1].distance_m(route[2]);
        assert!((cum[2] - total).abs() < 1e-9);
    }
}

// ── Point in polygon ──────────────────────────────────────────────────────────

#[cfg(test)]
mod point_in_polygon_tests {
    use super::*;

    #[test]
    fn degenerate_polygons_always_false() {
        for p in [pt(0.0, 0.0), pt(0.5, 0.5), pt(-3.0, 7.0)] {
            assert!(!point_in_polygon(p, &[]));
            assert!(!point_in_polygon(p, &[pt(0.0, 0.0)]));
            assert!(!point_in_polygon(p, &[pt(0.0, 0.0), pt(1.0, 1.0)]));
        }
    }

    #[test]
    fn inside_unit_square() {
        assert!(point_in_polygon(pt(0.5, 0.5), &unit_square()));
    }

    #[test]
    fn outside_unit_square() {
        assert!(!point_in_polygon(pt(0.5, 1.5), &unit_square()));
        assert!(!point_in_polygon(pt(-0.5, 0.5), &unit_square()));
    }

    #[test]
    fn closing_edge_is_implicit() {
        // Query near the edge from the last vertex back to the first.
        assert!(point_in_polygon(pt(0.5, 0.01), &unit_square()));
    }

    #[test]
    fn concave_polygon() {
        // U-shape: the notch at the top centre is outside.
        let u = vec![
            pt(0.0, 0.0),
            pt(0.0, 3.0),
            pt(2.0, 3.0),
            pt(2.0, 2.0),
            pt(1.0, 2.0),
            pt(1.0, 1.0),
            pt(2.0, 1.0),
            pt(2.0, 0.0),
        ];
        assert!(point_in_polygon(pt(0.5, 1.5), &u));
        assert!(!point_in_polygon(pt(1.5, 1.5), &u));
    }
}

// ── RidePhase ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ride_phase {
    use super::*;
    use crate::Leg;

    #[test]
    fn routing_legs() {
        assert_eq!(RidePhase::EnRouteToPickup.routing_leg(), Some(Leg::ToPickup));
        assert_eq!(RidePhase::EnRouteToDropoff.routing_leg(), Some(Leg::ToDropoff));
        assert_eq!(RidePhase::Arrived.routing_leg(), None);
        assert_eq!(RidePhase::Completed.routing_leg(), None);
        assert_eq!(RidePhase::Cancelled.routing_leg(), None);
    }

    #[test]
    fn terminal_phases() {
        assert!(RidePhase::Completed.is_terminal());
        assert!(RidePhase::Cancelled.is_terminal());
        assert!(!RidePhase::Arrived.is_terminal());
        assert!(!RidePhase::EnRouteToPickup.is_terminal());
    }
}

// ── Timestamp & config ────────────────────────────────────────────────────────

#[cfg(test)]
mod timestamp_and_config {
    use super::*;

    #[test]
    fn saturating_since_never_negative() {
        assert_eq!(Timestamp(2_000).saturating_since(Timestamp(500)), 1_500);
        assert_eq!(Timestamp(500).saturating_since(Timestamp(2_000)), 0);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(TrackingConfig::default().validate().is_ok());
    }

    #[test]
    fn bad_alpha_rejected() {
        let mut cfg = TrackingConfig::default();
        cfg.eta_alpha = 0.0;
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
        cfg.eta_alpha = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_threshold_rejected() {
        let mut cfg = TrackingConfig::default();
        cfg.jitter_floor_m = -1.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_grid_rejected() {
        let mut cfg = TrackingConfig::default();
        cfg.cache_grid_m = 0.0;
        assert!(cfg.validate().is_err());
    }
}
