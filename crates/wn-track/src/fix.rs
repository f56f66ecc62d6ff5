//! The location fix record.

use wn_core::{Coordinate, Timestamp};

/// One position reading from the device's location provider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationFix {
    pub position: Coordinate,
    /// Provider timestamp.  Device clocks can step backwards; consumers use
    /// saturating elapsed-time arithmetic.
    pub time: Timestamp,
    /// Estimated horizontal error radius in metres, if the provider reports
    /// one.  `None` means the provider gave no estimate, not zero error.
    pub accuracy_m: Option<f64>,
}

impl LocationFix {
    /// A fix with no accuracy estimate.
    pub fn at(position: Coordinate, time: Timestamp) -> Self {
        Self { position, time, accuracy_m: None }
    }
}
