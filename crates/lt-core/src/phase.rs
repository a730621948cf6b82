//! Ride phase enum shared across all tracking crates.
//!
//! The phase decides which (origin, destination) pair the routing layer uses:
//! the pickup leg routes driver → pickup, the dropoff leg routes
//! driver → dropoff.  `Arrived` routes nothing (driver waiting at pickup),
//! and the terminal phases end tracking entirely.

/// Which leg of the booking the route should cover.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Leg {
    /// Driver → pickup point.
    ToPickup,
    /// Driver → dropoff point.
    ToDropoff,
}

/// The lifecycle phase of the active booking.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum RidePhase {
    /// Driver accepted and is heading to the pickup point (default initial phase).
    #[default]
    EnRouteToPickup,
    /// Driver reached the pickup and is waiting for the rider.
    Arrived,
    /// Rider on board; driver heading to the dropoff point.
    EnRouteToDropoff,
    /// Ride finished normally.
    Completed,
    /// Ride cancelled by either party.
    Cancelled,
}

impl RidePhase {
    /// The routing leg active in this phase, or `None` when no route applies.
    #[inline]
    pub fn routing_leg(self) -> Option<Leg> {
        match self {
            RidePhase::EnRouteToPickup => Some(Leg::ToPickup),
            RidePhase::EnRouteToDropoff => Some(Leg::ToDropoff),
            _ => None,
        }
    }

    /// `true` for phases after which no further tracking happens.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, RidePhase::Completed | RidePhase::Cancelled)
    }

    /// Human-readable label, useful for log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            RidePhase::EnRouteToPickup  => "en_route_to_pickup",
            RidePhase::Arrived          => "arrived",
            RidePhase::EnRouteToDropoff => "en_route_to_dropoff",
            RidePhase::Completed        => "completed",
            RidePhase::Cancelled        => "cancelled",
        }
    }
}

impl std::fmt::Display for RidePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
