//! `lt-progress` — turning raw GPS fixes into monotone trip progress.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`filter`]  | `NoiseFilter` — drops sub-threshold GPS jitter                 |
//! | [`state`]   | `ProgressState` — the driver's position on the route           |
//! | [`tracker`] | `ProgressTracker` — projection + monotonicity enforcement      |
//! | [`eta`]     | `EtaEstimator`, `SmoothedEta` — EMA over raw ETA/distance      |
//!
//! # Why monotonicity is enforced here
//!
//! A rider watching the trip screen must never see the car slide backwards
//! because one GPS fix landed behind the last one.  The tracker therefore
//! holds a progress floor: small negative deltas are clamped to the previous
//! value, and only a reversal larger than the configured threshold (the
//! driver genuinely turned around) moves progress backwards.

pub mod eta;
pub mod filter;
pub mod state;
pub mod tracker;


pub use eta::{EtaEstimator, SmoothedEta};
pub use filter::NoiseFilter;
pub use state::ProgressState;
pub use tracker::ProgressTracker;
