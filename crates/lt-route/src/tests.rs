//! Unit tests for lt-route.

use std::sync::atomic::{AtomicUsize, Ordering};

use lt_core::{GeoPoint, RidePhase};

use crate::{
    Freshness, RouteCache, RouteError, RouteKey, RoutePolyline, RouteResult, RouteService,
    RouteSnapshot, FetchedRoute,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pt(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng)
}

/// Straight three-point route heading north, ~222 m total.
fn fetched_route() -> FetchedRoute {
    FetchedRoute {
        polyline: vec![pt(0.0, 0.0), pt(0.001, 0.0), pt(0.002, 0.0)],
        distance_m: 222.0,
        duration_s: 60.0,
    }
}

/// Always answers with `fetched_route()`, counting calls.
struct FixedService {
    calls: AtomicUsize,
}

impl FixedService {
    fn new() -> Self {
        Self { calls: AtomicUsize::new(0) }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RouteService for FixedService {
    fn fetch_route(&self, _origin: GeoPoint, _dest: GeoPoint) -> RouteResult<FetchedRoute> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(fetched_route())
    }
}

/// Always fails, as a downed routing backend would.
struct DownService;

impl RouteService for DownService {
    fn fetch_route(&self, _origin: GeoPoint, _dest: GeoPoint) -> RouteResult<FetchedRoute> {
        Err(RouteError::Service("connection timed out".to_string()))
    }
}

fn cache() -> RouteCache {
    RouteCache::new(10.0)
}

// ── RoutePolyline ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_polyline {
    use super::*;

    #[test]
    fn rejects_short_polylines() {
        assert!(matches!(
            RoutePolyline::new(vec![]),
            Err(RouteError::EmptyPolyline { got: 0 })
        ));
        assert!(matches!(
            RoutePolyline::new(vec![pt(0.0, 0.0)]),
            Err(RouteError::EmptyPolyline { got: 1 })
        ));
        assert!(RoutePolyline::new(vec![pt(0.0, 0.0), pt(1.0, 1.0)]).is_ok());
    }

    #[test]
    fn covered_prefix_includes_full_segment() {
        let line =
            RoutePolyline::new(vec![pt(0.0, 0.0), pt(0.001, 0.0), pt(0.002, 0.0), pt(0.003, 0.0)])
                .unwrap();
        // Projection on segment 1 → prefix runs through points[2].
        assert_eq!(line.covered_prefix(1), line.points()[..=2].to_vec());
        // Clamped at the last segment.
        assert_eq!(line.covered_prefix(99), line.points().to_vec());
    }

    #[test]
    fn remaining_suffix_starts_at_projection() {
        let line =
            RoutePolyline::new(vec![pt(0.0, 0.0), pt(0.001, 0.0), pt(0.002, 0.0)]).unwrap();
        let projection = pt(0.0005, 0.0);
        let suffix = line.remaining_suffix(projection, 0);
        assert_eq!(suffix[0], projection);
        assert_eq!(&suffix[1..], &line.points()[1..]);
    }

    #[test]
    fn zeroed_service_distance_falls_back_to_geometry() {
        let mut fetched = fetched_route();
        fetched.distance_m = 0.0;
        let key = RouteKey::quantized(pt(0.0, 0.0), pt(0.002, 0.0), RidePhase::EnRouteToPickup, 10.0);

        let snapshot =
            RouteSnapshot::from_fetched(fetched, RidePhase::EnRouteToPickup, key).unwrap();
        assert!(snapshot.total_distance_m > 0.0);
        assert!((snapshot.total_distance_m - snapshot.polyline.length_m()).abs() < 1e-9);
    }

    #[test]
    fn length_matches_cumulative_sum() {
        let line =
            RoutePolyline::new(vec![pt(0.0, 0.0), pt(0.001, 0.0), pt(0.002, 0.0)]).unwrap();
        let expected =
            pt(0.0, 0.0).distance_m(pt(0.001, 0.0)) + pt(0.001, 0.0).distance_m(pt(0.002, 0.0));
        assert!((line.length_m() - expected).abs() < 1e-9);
    }
}

// ── RouteKey quantization ─────────────────────────────────────────────────────

#[cfg(test)]
mod route_key {
    use super::*;

    #[test]
    fn sub_grid_jitter_shares_a_key() {
        // ~2 m of jitter on a 10 m grid, both fixes deep inside one cell.
        let a = RouteKey::quantized(
            pt(0.000_010, 0.000_010),
            pt(0.002, 0.0),
            RidePhase::EnRouteToPickup,
            10.0,
        );
        let b = RouteKey::quantized(
            pt(0.000_030, 0.000_020),
            pt(0.002, 0.0),
            RidePhase::EnRouteToPickup,
            10.0,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_origins_differ() {
        let a = RouteKey::quantized(
            pt(37.7749, -122.4194),
            pt(37.7800, -122.4100),
            RidePhase::EnRouteToPickup,
            10.0,
        );
        let b = RouteKey::quantized(
            pt(37.7760, -122.4194),
            pt(37.7800, -122.4100),
            RidePhase::EnRouteToPickup,
            10.0,
        );
        assert_ne!(a, b);
    }

    #[test]
    fn phase_is_part_of_identity() {
        let origin = pt(37.7749, -122.4194);
        let dest = pt(37.7800, -122.4100);
        let pickup = RouteKey::quantized(origin, dest, RidePhase::EnRouteToPickup, 10.0);
        let dropoff = RouteKey::quantized(origin, dest, RidePhase::EnRouteToDropoff, 10.0);
        assert_ne!(pickup, dropoff);
    }
}

// ── RouteCache ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_cache {
    use super::*;

    #[test]
    fn hit_skips_the_service() {
        let service = FixedService::new();
        let mut cache = cache();
        let origin = pt(0.0, 0.0);
        let dest = pt(0.002, 0.0);

        let first = cache
            .get_or_fetch(origin, dest, RidePhase::EnRouteToPickup, &service)
            .unwrap();
        assert_eq!(first.freshness, Freshness::Fresh);
        assert_eq!(service.call_count(), 1);

        // Same request with ~1 m of origin jitter: same quantized key.
        let second = cache
            .get_or_fetch(pt(0.000_008, 0.0), dest, RidePhase::EnRouteToPickup, &service)
            .unwrap();
        assert_eq!(second, first);
        assert_eq!(service.call_count(), 1);
    }

    #[test]
    fn phase_change_forces_refetch() {
        let service = FixedService::new();
        let mut cache = cache();
        let origin = pt(0.0, 0.0);
        let dest = pt(0.002, 0.0);

        cache
            .get_or_fetch(origin, dest, RidePhase::EnRouteToPickup, &service)
            .unwrap();
        cache
            .get_or_fetch(origin, dest, RidePhase::EnRouteToDropoff, &service)
            .unwrap();
        assert_eq!(service.call_count(), 2);
    }

    #[test]
    fn failure_serves_stale_snapshot_for_phase() {
        let mut cache = cache();
        let origin = pt(0.0, 0.0);
        let dest = pt(0.002, 0.0);

        // Seed the cache, then kill the backend.
        let fresh = cache
            .get_or_fetch(origin, dest, RidePhase::EnRouteToPickup, &FixedService::new())
            .unwrap();

        // A different origin misses the key, the fetch fails, and the prior
        // snapshot for the same phase comes back marked stale.
        let stale = cache
            .get_or_fetch(pt(0.01, 0.0), dest, RidePhase::EnRouteToPickup, &DownService)
            .unwrap();
        assert_eq!(stale.freshness, Freshness::Stale);
        assert_eq!(stale.polyline, fresh.polyline);
    }

    #[test]
    fn failure_with_empty_cache_is_unavailable() {
        let mut cache = cache();
        let result =
            cache.get_or_fetch(pt(0.0, 0.0), pt(0.002, 0.0), RidePhase::EnRouteToPickup, &DownService);
        assert!(matches!(result, Err(RouteError::Unavailable)));
    }

    #[test]
    fn failure_with_wrong_phase_cached_is_unavailable() {
        let mut cache = cache();
        cache
            .get_or_fetch(pt(0.0, 0.0), pt(0.002, 0.0), RidePhase::EnRouteToPickup, &FixedService::new())
            .unwrap();

        // Only a pickup-leg snapshot exists; the dropoff leg cannot use it.
        let result = cache.get_or_fetch(
            pt(0.0, 0.0),
            pt(0.002, 0.0),
            RidePhase::EnRouteToDropoff,
            &DownService,
        );
        assert!(matches!(result, Err(RouteError::Unavailable)));
    }

    #[test]
    fn evicted_snapshot_remains_as_fallback() {
        let service = FixedService::new();
        let mut cache = cache();
        let dest = pt(0.002, 0.0);

        cache
            .get_or_fetch(pt(0.0, 0.0), dest, RidePhase::EnRouteToPickup, &service)
            .unwrap();
        // New origin evicts the first snapshot into the fallback slot.
        cache
            .get_or_fetch(pt(0.01, 0.0), dest, RidePhase::EnRouteToPickup, &service)
            .unwrap();

        let fallback = cache.fallback_for_phase(RidePhase::EnRouteToPickup);
        assert!(fallback.is_some());
        assert_eq!(fallback.unwrap().freshness, Freshness::Stale);
    }
}
