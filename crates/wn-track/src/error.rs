use thiserror::Error;

use wn_core::GeoError;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("tracking configuration error: {0}")]
    Config(String),

    #[error("geo validation error: {0}")]
    Geo(#[from] GeoError),
}

pub type TrackResult<T> = Result<T, TrackError>;
