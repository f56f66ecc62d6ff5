//! Wall-clock timestamps for location fixes and board snapshots.
//!
//! Device providers stamp fixes with unix milliseconds; the fix filter only
//! ever needs elapsed-time arithmetic on those stamps, so a thin `i64`
//! newtype is enough.  No datetime library, no timezone handling.
//!
//! Device clocks can step backwards (NTP corrections, user changes), so
//! elapsed time saturates at zero instead of going negative.

use std::fmt;

/// A unix timestamp in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Construct from unix seconds.
    #[inline]
    pub const fn from_unix_secs(secs: i64) -> Self {
        Timestamp(secs * 1_000)
    }

    /// Raw unix milliseconds.
    #[inline]
    pub fn unix_ms(self) -> i64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero
    /// when `earlier` is actually later (backwards clock step).
    #[inline]
    pub fn millis_since(self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0).max(0)
    }
}

impl std::ops::Add<i64> for Timestamp {
    type Output = Timestamp;
    /// Offset by `rhs` milliseconds.
    #[inline]
    fn add(self, rhs: i64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = i64;
    /// Signed difference in milliseconds.
    #[inline]
    fn sub(self, rhs: Timestamp) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
