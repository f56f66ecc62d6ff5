//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` uses `f64` latitude/longitude in decimal degrees.  A task
//! board holds tens of entries, not millions, so there is no reason to trade
//! precision for memory; double precision keeps displayed distances stable
//! down to the metre.
//!
//! # Validation
//!
//! Raw sensor and record values enter through [`Coordinate::new`], which
//! rejects non-finite values and out-of-range degrees.  Everything downstream
//! (distance, ETA, proximity ordering) therefore operates on known-good
//! coordinates and never has to reason about NaN.

use crate::error::{GeoError, GeoResult};

/// Mean Earth radius in kilometres, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 geographic coordinate in decimal degrees.
///
/// Invariant: `lat ∈ [-90, 90]`, `lon ∈ [-180, 180]`, both finite.  Enforced
/// by [`Coordinate::new`] / [`Coordinate::clamped`]; the fields are private
/// so the invariant cannot be broken after construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Construct a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NonFinite`] for NaN or infinite input, and
    /// [`GeoError::LatitudeOutOfRange`] / [`GeoError::LongitudeOutOfRange`]
    /// for finite values outside the valid degree ranges.
    pub fn new(lat: f64, lon: f64) -> GeoResult<Self> {
        if !lat.is_finite() {
            return Err(GeoError::NonFinite { what: "latitude", value: lat });
        }
        if !lon.is_finite() {
            return Err(GeoError::NonFinite { what: "longitude", value: lon });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Construct a coordinate by clamping the inputs into range.
    ///
    /// Intended for sensor-adjacent call sites where a fix can drift a
    /// fraction of a degree past the poles or the antimeridian and the
    /// correct response is to pin it, not to fail.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if either input is NaN or infinite; clamping
    /// cannot repair those.
    pub fn clamped(lat: f64, lon: f64) -> Self {
        debug_assert!(lat.is_finite(), "latitude must be finite");
        debug_assert!(lon.is_finite(), "longitude must be finite");
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lon: lon.clamp(-180.0, 180.0),
        }
    }

    /// Latitude in decimal degrees.
    #[inline]
    pub fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[inline]
    pub fn lon(self) -> f64 {
        self.lon
    }

    /// Haversine great-circle distance in kilometres, full precision.
    ///
    /// Symmetric, zero at identity, non-negative, and monotone with angular
    /// separation.  Callers that display the value round it themselves (the
    /// observed UI shows one decimal).
    pub fn distance_km(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Float rounding can push `a` a hair past 1.0 near antipodes, which
        // would make sqrt(1 - a) NaN.
        let a = a.min(1.0);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Haversine distance in metres.
    #[inline]
    pub fn distance_m(self, other: Coordinate) -> f64 {
        self.distance_km(other) * 1000.0
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
