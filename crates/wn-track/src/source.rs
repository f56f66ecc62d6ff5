//! Fix sources: the device-adapter boundary.
//!
//! A [`TrackingSession`][crate::TrackingSession] pulls fixes from anything
//! implementing [`LocationSource`].  On a device that is a thin wrapper over
//! the platform location provider; this crate ships a recorded-trace source
//! and a deterministic simulated walk for tests and demos.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use wn_core::{Coordinate, Timestamp};

use crate::fix::LocationFix;

/// Pull-based producer of location fixes.
pub trait LocationSource {
    /// The next fix, or `None` once the stream is exhausted.
    fn next_fix(&mut self) -> Option<LocationFix>;
}

// ── ReplaySource ──────────────────────────────────────────────────────────────

/// Replays a pre-recorded list of fixes in order.
pub struct ReplaySource {
    fixes: std::vec::IntoIter<LocationFix>,
}

impl ReplaySource {
    pub fn new(fixes: Vec<LocationFix>) -> Self {
        Self { fixes: fixes.into_iter() }
    }
}

impl LocationSource for ReplaySource {
    fn next_fix(&mut self) -> Option<LocationFix> {
        self.fixes.next()
    }
}

// ── SimulatedWalk ─────────────────────────────────────────────────────────────

/// A deterministic walk from one coordinate to another.
///
/// Emits `steps + 1` fixes: a linear interpolation from `from` to `to` with
/// seeded positional jitter, stamped at a fixed cadence.  `steps = 0` emits a
/// single fix at `from`.  Same seed, same fixes.
pub struct SimulatedWalk {
    rng:         SmallRng,
    from:        Coordinate,
    to:          Coordinate,
    steps:       u32,
    next_step:   u32,
    interval_ms: i64,
    start:       Timestamp,
    jitter_deg:  f64,
}

impl SimulatedWalk {
    pub fn new(seed: u64, from: Coordinate, to: Coordinate, steps: u32) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            from,
            to,
            steps,
            next_step:   0,
            interval_ms: 5_000,
            start:       Timestamp::ZERO,
            // ~22 m of scatter at the equator, enough to look like GPS.
            jitter_deg:  2e-4,
        }
    }

    /// Milliseconds between consecutive fixes (default 5 000).
    pub fn with_interval_ms(mut self, interval_ms: i64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Timestamp of the first fix (default [`Timestamp::ZERO`]).
    pub fn with_start(mut self, start: Timestamp) -> Self {
        self.start = start;
        self
    }

    /// Positional scatter in degrees; `0.0` walks the exact line.
    pub fn with_jitter_deg(mut self, jitter_deg: f64) -> Self {
        self.jitter_deg = jitter_deg;
        self
    }

    fn jitter(&mut self) -> f64 {
        if self.jitter_deg > 0.0 {
            self.rng.gen_range(-self.jitter_deg..=self.jitter_deg)
        } else {
            0.0
        }
    }
}

impl LocationSource for SimulatedWalk {
    fn next_fix(&mut self) -> Option<LocationFix> {
        if self.next_step > self.steps {
            return None;
        }

        let t = if self.steps == 0 {
            0.0
        } else {
            self.next_step as f64 / self.steps as f64
        };
        let lat = lerp(self.from.lat(), self.to.lat(), t) + self.jitter();
        let lon = lerp(self.from.lon(), self.to.lon(), t) + self.jitter();
        let time = self.start + self.next_step as i64 * self.interval_ms;
        let accuracy = self.rng.gen_range(4.0..25.0);

        self.next_step += 1;

        Some(LocationFix {
            // Jitter can nudge a pole-adjacent walk out of range; pin it.
            position: Coordinate::clamped(lat, lon),
            time,
            accuracy_m: Some(accuracy),
        })
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
