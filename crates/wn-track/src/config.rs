//! Tracking session configuration.

use wn_core::{TravelProfile, URBAN_AVERAGE_SPEED_KMH};

use crate::error::{TrackError, TrackResult};

/// Thresholds and the travel speed for one tracking session.
///
/// The defaults reproduce the production subscription: a fix is worth
/// processing when at least 5 s passed *and* the device moved at least 10 m
/// since the last accepted fix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackConfig {
    /// Minimum elapsed time between accepted fixes, in milliseconds.
    pub min_interval_ms: i64,
    /// Minimum displacement between accepted fixes, in metres.
    pub min_displacement_m: f64,
    /// Discard fixes whose reported accuracy radius exceeds this bound.
    /// `None` disables the gate; fixes without an accuracy estimate always
    /// pass it.
    pub max_accuracy_m: Option<f64>,
    /// Assumed average travel speed for ETA rows, in km/h.
    pub speed_kmh: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            min_interval_ms:    5_000,
            min_displacement_m: 10.0,
            max_accuracy_m:     None,
            speed_kmh:          URBAN_AVERAGE_SPEED_KMH,
        }
    }
}

impl TrackConfig {
    /// Check every field once, up front, so the session loop never has to.
    ///
    /// # Errors
    ///
    /// [`TrackError::Config`] for bad thresholds, [`TrackError::Geo`] for a
    /// speed [`TravelProfile`] rejects.
    pub fn validate(&self) -> TrackResult<()> {
        if self.min_interval_ms < 0 {
            return Err(TrackError::Config(format!(
                "min_interval_ms must be >= 0, got {}",
                self.min_interval_ms
            )));
        }
        if !self.min_displacement_m.is_finite() || self.min_displacement_m < 0.0 {
            return Err(TrackError::Config(format!(
                "min_displacement_m must be finite and >= 0, got {}",
                self.min_displacement_m
            )));
        }
        if let Some(bound) = self.max_accuracy_m {
            if !bound.is_finite() || bound <= 0.0 {
                return Err(TrackError::Config(format!(
                    "max_accuracy_m must be finite and > 0, got {bound}"
                )));
            }
        }
        TravelProfile::new(self.speed_kmh)?;
        Ok(())
    }
}
