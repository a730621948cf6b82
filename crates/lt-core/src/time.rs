//! Event time model.
//!
//! Driver-location events arrive stamped with the sender's wall clock.  The
//! engine never reads a system clock itself; all time comes in through event
//! payloads, which keeps every component deterministic and replayable.

use std::fmt;

/// A Unix timestamp in milliseconds, as delivered by the socket layer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Construct from whole seconds.
    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1_000)
    }

    /// Milliseconds elapsed from `earlier` to `self`; 0 if `earlier` is later
    /// (out-of-order sender clocks must not produce negative intervals).
    #[inline]
    pub fn saturating_since(self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0).max(0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
