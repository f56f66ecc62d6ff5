//! Plain data row types written by report backends.

use wn_track::FixDisposition;

/// One gated fix, accepted or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixTraceRow {
    pub time_unix_ms: i64,
    pub worker_id:    u64,
    pub lat:          f64,
    pub lon:          f64,
    /// Provider accuracy radius; `None` when the provider gave no estimate.
    pub accuracy_m:   Option<f64>,
    pub disposition:  FixDisposition,
}

/// One table row as ranked at one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximitySnapshotRow {
    pub time_unix_ms: i64,
    pub worker_id:    u64,
    pub task_id:      u64,
    /// Position in the ranked table at this update; 0 is the nearest task.
    pub rank:         u32,
    pub distance_km:  f64,
    pub eta_min:      u32,
}
