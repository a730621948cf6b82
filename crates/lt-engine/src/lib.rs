//! `lt-engine` — the live-ride tracking engine for the `livetrack` workspace.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`engine`]   | `LiveRideEngine`, `EngineUpdate` — the state machine       |
//! | [`builder`]  | `EngineBuilder`                                            |
//! | [`event`]    | `RideEvent` — the serialized input stream                  |
//! | [`fetch`]    | `RouteRequest`, `FetchTicket` — split-phase route fetching |
//! | [`tracking`] | `TrackingState`, `RouteStatus` — the emitted output        |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                           |
//!
//! # Event loop
//!
//! ```text
//! socket layer ──▶ engine.handle(event) ──▶ EngineUpdate
//!                                             ├─ state: TrackingState   → rendering layer
//!                                             └─ fetch: RouteRequest?   → routing executor
//!                                                   │
//!                                                   └─▶ RideEvent::RouteResolved { ticket, .. }
//! ```
//!
//! # Concurrency contract
//!
//! The engine is logically single-threaded per ride: the socket collaborator
//! delivers events in arrival order and the engine owns all per-ride state,
//! so there is nothing to lock.  Route fetches run on the collaborator's
//! executor; the engine keeps tracking against the previous snapshot while
//! one is outstanding, allows at most one in flight, and discards
//! completions whose fetch epoch predates the latest phase change.

pub mod builder;
pub mod engine;
pub mod error;
pub mod event;
pub mod fetch;
pub mod tracking;


pub use builder::EngineBuilder;
pub use engine::{EngineUpdate, LiveRideEngine};
pub use error::{EngineError, EngineResult};
pub use event::RideEvent;
pub use fetch::{FetchTicket, RouteRequest};
pub use tracking::{RouteStatus, TrackingState};
