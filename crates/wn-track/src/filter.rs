//! The stateful fix gate.
//!
//! Position providers emit far more fixes than the proximity table needs;
//! re-ranking tens of tasks several times a second would burn battery for no
//! visible change.  The filter passes a fix through only when enough time
//! *and* enough movement separate it from the last accepted one.

use crate::config::TrackConfig;
use crate::fix::LocationFix;

// ── FixDisposition ────────────────────────────────────────────────────────────

/// Outcome of [`FixFilter::check`] for one fix.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixDisposition {
    /// The fix became the new baseline; the table should be recomputed.
    Accepted,
    /// Less than `min_interval_ms` since the last accepted fix.
    TooSoon,
    /// Moved less than `min_displacement_m` since the last accepted fix.
    TooClose,
    /// Reported accuracy radius exceeds `max_accuracy_m`.
    Inaccurate,
}

impl FixDisposition {
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, FixDisposition::Accepted)
    }

    /// Stable lowercase label, used in trace exports.
    pub fn as_str(self) -> &'static str {
        match self {
            FixDisposition::Accepted   => "accepted",
            FixDisposition::TooSoon    => "too_soon",
            FixDisposition::TooClose   => "too_close",
            FixDisposition::Inaccurate => "inaccurate",
        }
    }
}

impl std::fmt::Display for FixDisposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FixFilter ─────────────────────────────────────────────────────────────────

/// Stateful gate over a fix stream.
///
/// # Decision order
///
/// 1. Accuracy: a fix over the accuracy bound is `Inaccurate` outright, so a
///    garbage reading never becomes the baseline (not even the first one).
/// 2. First accurate fix is always `Accepted`.
/// 3. Interval: less than `min_interval_ms` since the baseline is `TooSoon`.
///    Elapsed time saturates at zero, so a fix stamped *before* the baseline
///    (clock step) counts as no time passed.
/// 4. Displacement: less than `min_displacement_m` from the baseline is
///    `TooClose`.
pub struct FixFilter {
    min_interval_ms:    i64,
    min_displacement_m: f64,
    max_accuracy_m:     Option<f64>,
    last_accepted:      Option<LocationFix>,
}

impl FixFilter {
    pub fn new(config: &TrackConfig) -> Self {
        Self {
            min_interval_ms:    config.min_interval_ms,
            min_displacement_m: config.min_displacement_m,
            max_accuracy_m:     config.max_accuracy_m,
            last_accepted:      None,
        }
    }

    /// Gate one fix.  On `Accepted` the fix becomes the new baseline.
    pub fn check(&mut self, fix: &LocationFix) -> FixDisposition {
        if let (Some(bound), Some(accuracy)) = (self.max_accuracy_m, fix.accuracy_m) {
            if accuracy > bound {
                return FixDisposition::Inaccurate;
            }
        }

        let Some(last) = self.last_accepted else {
            self.last_accepted = Some(*fix);
            return FixDisposition::Accepted;
        };

        if fix.time.millis_since(last.time) < self.min_interval_ms {
            return FixDisposition::TooSoon;
        }
        if fix.position.distance_m(last.position) < self.min_displacement_m {
            return FixDisposition::TooClose;
        }

        self.last_accepted = Some(*fix);
        FixDisposition::Accepted
    }

    /// The current baseline fix, if any fix has been accepted yet.
    #[inline]
    pub fn last_accepted(&self) -> Option<LocationFix> {
        self.last_accepted
    }

    /// Drop the baseline; the next accurate fix will be accepted.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
