//! `lt-core` — foundational types for the `livetrack` ride-tracking engine.
//!
//! This crate is a dependency of every other `lt-*` crate.  It intentionally
//! has no `lt-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance                        |
//! | [`polyline`] | segment/polyline projection, point-in-polygon         |
//! | [`phase`]    | `RidePhase`, `Leg`                                    |
//! | [`time`]     | `Timestamp` (Unix milliseconds)                       |
//! | [`config`]   | `TrackingConfig` — every tunable threshold            |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod phase;
pub mod polyline;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrackingConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use phase::{Leg, RidePhase};
pub use polyline::{
    cumulative_lengths, point_in_polygon, project_onto_polyline, project_onto_segment,
    PolylineProjection, SegmentProjection,
};
pub use time::Timestamp;
