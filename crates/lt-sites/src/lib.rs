//! `lt-sites` — known airport/campus sites and coordinate-to-site resolution.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`site`]     | `Site`, `Poi`, `BoundingBox`                               |
//! | [`detector`] | `SiteDetector` — R-tree pre-filter + exact polygon test    |
//! | [`loader`]   | JSON configuration loader                                  |
//! | [`error`]    | `SiteError`, `SiteResult<T>`                               |
//!
//! # Purpose
//!
//! Large venues (airports, campuses) have designated pickup/dropoff points.
//! When a raw booking coordinate falls inside such a site's polygon, the
//! tracking engine substitutes the site's preferred point of interest — a
//! terminal kerb instead of a geocoded address centroid.
//!
//! Site definitions are loaded once at session start and read-only
//! thereafter.

pub mod detector;
pub mod error;
pub mod loader;
pub mod site;


pub use detector::SiteDetector;
pub use error::{SiteError, SiteResult};
pub use loader::{load_sites_json, load_sites_reader};
pub use site::{BoundingBox, Poi, Site};
