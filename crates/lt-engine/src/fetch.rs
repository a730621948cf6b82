//! Split-phase route fetching.
//!
//! The engine never blocks on the routing backend.  A cache miss produces a
//! [`RouteRequest`] inside the returned [`EngineUpdate`][crate::EngineUpdate];
//! the collaborator executes it on its own executor and delivers the outcome
//! back through
//! [`LiveRideEngine::on_route_resolved`][crate::LiveRideEngine::on_route_resolved],
//! echoing the request's [`FetchTicket`] unchanged.
//!
//! The ticket's epoch is what makes late completions safe to discard: a phase
//! change bumps the engine's epoch, so a completion fetched for the previous
//! leg no longer matches and is dropped on arrival.

use lt_core::{GeoPoint, RidePhase};
use lt_route::RouteKey;

/// Correlation token for one outstanding route fetch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchTicket {
    /// The engine's fetch epoch at issue time.  Bumped on phase change.
    pub epoch: u64,
    /// The quantized request identity the completion will be stored under.
    pub key: RouteKey,
}

/// A route fetch the collaborator should execute.
///
/// At most one is outstanding per engine at any time.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Echo this back verbatim in `on_route_resolved`.
    pub ticket: FetchTicket,
    pub origin: GeoPoint,
    /// Destination after site resolution (preferred POI substituted when the
    /// raw booking coordinate falls inside a configured site).
    pub destination: GeoPoint,
    /// The leg this fetch serves.
    pub phase: RidePhase,
}
