//! `lt-route` — route snapshots, the routing collaborator, and the cache.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`polyline`] | `RoutePolyline` — validated, immutable route geometry      |
//! | [`snapshot`] | `RouteSnapshot`, `RouteKey`, `Freshness`                   |
//! | [`service`]  | `RouteService` trait, `FetchedRoute`                       |
//! | [`cache`]    | `RouteCache` — quantized keys, stale-but-usable fallback   |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                             |
//!
//! # Degradation policy
//!
//! Live tracking must never blank out because the routing backend hiccuped.
//! On a fetch failure the cache serves the last snapshot it holds for the
//! current ride phase, marked [`Freshness::Stale`]; only with zero prior data
//! does [`RouteError::Unavailable`] surface to the caller.

pub mod cache;
pub mod error;
pub mod polyline;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use cache::RouteCache;
pub use error::{RouteError, RouteResult};
pub use polyline::RoutePolyline;
pub use service::{FetchedRoute, RouteService};
pub use snapshot::{Freshness, RouteKey, RouteSnapshot};
