//! The engine's input messages.

use lt_core::{GeoPoint, RidePhase, Timestamp};
use lt_route::{FetchedRoute, RouteResult};

use crate::FetchTicket;

/// One message in the serialized per-ride event stream.
///
/// The socket collaborator delivers these in arrival order; the engine never
/// reorders or deduplicates beyond jitter rejection.  Dispatch via
/// [`LiveRideEngine::handle`][crate::LiveRideEngine::handle], or call the
/// per-variant entry points directly.
#[derive(Debug)]
pub enum RideEvent {
    /// A driver GPS fix, stamped with the sender's clock.
    DriverLocation { position: GeoPoint, at: Timestamp },

    /// The booking moved to a new lifecycle phase.
    PhaseChange(RidePhase),

    /// A previously requested route fetch completed.
    RouteResolved {
        /// The ticket from the originating [`RouteRequest`][crate::RouteRequest].
        ticket:  FetchTicket,
        outcome: RouteResult<FetchedRoute>,
        at:      Timestamp,
    },

    /// The ride is over (completed or cancelled upstream).
    RideEnded,
}
