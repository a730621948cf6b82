//! The routing collaborator trait.
//!
//! # Pluggability
//!
//! The engine and cache call routing via the [`RouteService`] trait, so
//! applications can back it with any HTTP/gRPC client, a recorded fixture,
//! or an on-device router, without touching the tracking core.
//!
//! # Thread safety
//!
//! Implementations must be `Send + Sync`: collaborators typically execute
//! fetches on their own executor and deliver results back into the engine's
//! single-threaded event stream.

use lt_core::GeoPoint;

use crate::RouteResult;

/// The raw payload a routing backend returns for one (origin, destination)
/// query, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchedRoute {
    /// Route geometry from origin to destination.  Must contain at least
    /// two points; shorter payloads are rejected at snapshot construction.
    pub polyline: Vec<GeoPoint>,
    /// Total route length in metres.
    pub distance_m: f64,
    /// Total expected travel time in seconds.
    pub duration_s: f64,
}

/// Pluggable routing backend.
pub trait RouteService: Send + Sync {
    /// Compute a route from `origin` to `destination`.
    ///
    /// May fail or time out; failures are mapped to
    /// [`RouteError::Service`][crate::RouteError::Service] by the
    /// implementation and degrade to cached data in [`RouteCache`][crate::RouteCache].
    fn fetch_route(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<FetchedRoute>;
}
