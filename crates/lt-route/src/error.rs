//! Routing-subsystem error type.
//!
//! Note the deliberately small surface: a *stale* route is not an error
//! (see [`Freshness`][crate::Freshness]).  The only hard failure is
//! `Unavailable` — no network route and nothing cached to degrade to.

use thiserror::Error;

/// Errors produced by `lt-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The routing service failed and no cached route exists for the phase.
    #[error("no route available: fetch failed with no cached fallback")]
    Unavailable,

    /// The routing backend reported a failure (timeout, 5xx, transport).
    #[error("routing service error: {0}")]
    Service(String),

    /// The service returned a geometrically unusable polyline.
    #[error("route polyline must contain at least 2 points, got {got}")]
    EmptyPolyline { got: usize },
}

/// Shorthand result type for `lt-route`.
pub type RouteResult<T> = Result<T, RouteError>;
