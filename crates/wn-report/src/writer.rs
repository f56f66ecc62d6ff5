//! The `ReportWriter` trait implemented by all backend writers.

use crate::{FixTraceRow, ProximitySnapshotRow, ReportResult};

/// Trait for session-trace backends.
///
/// All methods are infallible from the observer's perspective.  Errors are
/// stored internally and retrieved with
/// [`SessionReporter::take_error`][crate::SessionReporter::take_error].
pub trait ReportWriter {
    /// Write one gated fix.
    fn write_fix(&mut self, row: &FixTraceRow) -> ReportResult<()>;

    /// Write the ranked rows of one table update.
    fn write_proximity(&mut self, rows: &[ProximitySnapshotRow]) -> ReportResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
