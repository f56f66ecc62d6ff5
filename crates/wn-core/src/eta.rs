//! Travel-time estimation from straight-line distance.
//!
//! There is no routing or traffic data on the device; arrival estimates use
//! great-circle distance over a fixed assumed average speed.  The default of
//! 30 km/h is the urban average the rest of the product displays.  Changing
//! it changes every rendered estimate at once.

use crate::error::{GeoError, GeoResult};
use crate::geo::Coordinate;

/// Assumed average urban travel speed, in km/h.
pub const URBAN_AVERAGE_SPEED_KMH: f64 = 30.0;

// ── Eta ───────────────────────────────────────────────────────────────────────

/// An estimated travel time in whole minutes.
///
/// Displays as `"<minutes> min"`, the form the task list renders.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eta(pub u32);

impl Eta {
    pub const ZERO: Eta = Eta(0);

    /// Estimated minutes of travel.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Eta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.0)
    }
}

// ── TravelProfile ─────────────────────────────────────────────────────────────

/// Converts distances into [`Eta`]s at a fixed average speed.
///
/// The profile is validated at construction, so estimation itself is a pure,
/// infallible function.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelProfile {
    speed_kmh: f64,
}

impl TravelProfile {
    /// Create a profile with a custom average speed in km/h.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::SpeedOutOfRange`] unless the speed is finite and
    /// strictly positive.
    pub fn new(speed_kmh: f64) -> GeoResult<Self> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(GeoError::SpeedOutOfRange(speed_kmh));
        }
        Ok(Self { speed_kmh })
    }

    /// The assumed average speed in km/h.
    #[inline]
    pub fn speed_kmh(self) -> f64 {
        self.speed_kmh
    }

    /// Estimated travel time for `distance_km`, rounded to whole minutes.
    ///
    /// Monotone in distance; zero distance yields zero minutes.  A negative
    /// distance cannot come out of [`Coordinate::distance_km`], but if one is
    /// passed anyway the saturating cast clamps the result to zero rather
    /// than wrapping.
    pub fn eta(self, distance_km: f64) -> Eta {
        let hours = distance_km / self.speed_kmh;
        Eta((hours * 60.0).round() as u32)
    }

    /// Distance and ETA in one call: `eta(from.distance_km(to))`.
    #[inline]
    pub fn eta_between(self, from: Coordinate, to: Coordinate) -> Eta {
        self.eta(from.distance_km(to))
    }
}

impl Default for TravelProfile {
    /// The product-wide urban default of 30 km/h.
    fn default() -> Self {
        Self { speed_kmh: URBAN_AVERAGE_SPEED_KMH }
    }
}
