//! Tracking observer trait for progress reporting and data collection.

use crate::filter::FixDisposition;
use crate::fix::LocationFix;
use crate::proximity::ProximityTable;
use crate::session::SessionStats;

/// Callbacks invoked by [`TrackingSession`][crate::TrackingSession] as fixes
/// flow through the filter.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — nearest-task printer
///
/// ```rust,ignore
/// struct NearestPrinter;
///
/// impl TrackObserver for NearestPrinter {
///     fn on_table_update(&mut self, _at: &LocationFix, table: &ProximityTable) {
///         if let Some(row) = table.nearest() {
///             println!("{}: {:.1} km, {}", row.task_id, row.distance_km, row.eta);
///         }
///     }
/// }
/// ```
pub trait TrackObserver {
    /// Called for every fix that passes the filter, before the table is
    /// recomputed.
    fn on_fix_accepted(&mut self, _fix: &LocationFix) {}

    /// Called for every fix the filter rejects, with the reason.
    fn on_fix_discarded(&mut self, _fix: &LocationFix, _why: FixDisposition) {}

    /// Called after the table has been recomputed for an accepted fix.
    ///
    /// Provides read-only access to the freshly ranked rows so output
    /// writers can record them without the session knowing about any
    /// specific output format.
    fn on_table_update(&mut self, _at: &LocationFix, _table: &ProximityTable) {}

    /// Called once when the fix source is exhausted.
    fn on_session_end(&mut self, _stats: &SessionStats) {}
}

/// A [`TrackObserver`] that does nothing.  Use when you need to run a
/// session but don't want callbacks.
pub struct NoopObserver;

impl TrackObserver for NoopObserver {}
