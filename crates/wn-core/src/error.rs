//! Validation error type for the core primitives.
//!
//! Downstream crates define their own error enums and wrap `GeoError` as a
//! variant via `#[from]` where a coordinate or profile is constructed from
//! untrusted input.

use thiserror::Error;

/// Errors from constructing core value types out of raw numbers.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("{what} is not finite (got {value})")]
    NonFinite { what: &'static str, value: f64 },

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("average speed {0} km/h must be finite and positive")]
    SpeedOutOfRange(f64),
}

/// Shorthand result type for core validation.
pub type GeoResult<T> = Result<T, GeoError>;
