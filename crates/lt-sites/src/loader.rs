//! JSON site-configuration loader.
//!
//! # Format
//!
//! A top-level array of site records:
//!
//! ```json
//! [
//!   {
//!     "id": "sfo",
//!     "name": "San Francisco International",
//!     "polygon": [
//!       { "lat": 37.6040, "lng": -122.3990 },
//!       { "lat": 37.6040, "lng": -122.3750 },
//!       { "lat": 37.6290, "lng": -122.3750 },
//!       { "lat": 37.6290, "lng": -122.3990 }
//!     ],
//!     "pois": [
//!       { "id": "t1", "name": "Terminal 1 kerb", "position": { "lat": 37.6135, "lng": -122.3892 } },
//!       { "id": "t2", "name": "Terminal 2 kerb", "position": { "lat": 37.6142, "lng": -122.3860 } }
//!     ],
//!     "preferred_poi": "t2"
//!   }
//! ]
//! ```
//!
//! `pois` and `preferred_poi` are optional.  Validation (polygon arity,
//! duplicate ids) happens in [`SiteDetector::new`], not here.

use std::io::Read;
use std::path::Path;

use crate::{Site, SiteError, SiteResult};

/// Load site records from a JSON file.
pub fn load_sites_json(path: &Path) -> SiteResult<Vec<Site>> {
    let file = std::fs::File::open(path).map_err(SiteError::Io)?;
    load_sites_reader(file)
}

/// Like [`load_sites_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for configuration
/// delivered over the network.
pub fn load_sites_reader<R: Read>(reader: R) -> SiteResult<Vec<Site>> {
    serde_json::from_reader(reader).map_err(|e| SiteError::Parse(e.to_string()))
}
