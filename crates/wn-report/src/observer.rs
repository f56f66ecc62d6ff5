//! `SessionReporter<W>` — bridges `TrackObserver` to a `ReportWriter`.

use wn_core::WorkerId;
use wn_track::{FixDisposition, LocationFix, ProximityTable, SessionStats, TrackObserver};

use crate::ReportError;
use crate::row::{FixTraceRow, ProximitySnapshotRow};
use crate::writer::ReportWriter;

/// A [`TrackObserver`] that writes every gated fix and every table update to
/// a [`ReportWriter`] backend.
///
/// Errors from the writer are stored internally because `TrackObserver`
/// methods have no return value.  After the session ends, check for errors
/// with [`take_error`][Self::take_error].
pub struct SessionReporter<W: ReportWriter> {
    writer:     W,
    worker_id:  u64,
    last_error: Option<ReportError>,
}

impl<W: ReportWriter> SessionReporter<W> {
    /// Create a reporter backed by `writer` for one worker's session.
    pub fn new(writer: W, worker: WorkerId) -> Self {
        Self {
            writer,
            worker_id:  worker.raw(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the session ends.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn fix_row(&self, fix: &LocationFix, disposition: FixDisposition) -> FixTraceRow {
        FixTraceRow {
            time_unix_ms: fix.time.unix_ms(),
            worker_id:    self.worker_id,
            lat:          fix.position.lat(),
            lon:          fix.position.lon(),
            accuracy_m:   fix.accuracy_m,
            disposition,
        }
    }

    fn store_err(&mut self, result: crate::ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> TrackObserver for SessionReporter<W> {
    fn on_fix_accepted(&mut self, fix: &LocationFix) {
        let row = self.fix_row(fix, FixDisposition::Accepted);
        let result = self.writer.write_fix(&row);
        self.store_err(result);
    }

    fn on_fix_discarded(&mut self, fix: &LocationFix, why: FixDisposition) {
        let row = self.fix_row(fix, why);
        let result = self.writer.write_fix(&row);
        self.store_err(result);
    }

    fn on_table_update(&mut self, at: &LocationFix, table: &ProximityTable) {
        let rows: Vec<ProximitySnapshotRow> = table
            .rows()
            .iter()
            .enumerate()
            .map(|(rank, row)| ProximitySnapshotRow {
                time_unix_ms: at.time.unix_ms(),
                worker_id:    self.worker_id,
                task_id:      row.task_id.raw(),
                rank:         rank as u32,
                distance_km:  row.distance_km,
                eta_min:      row.eta.minutes(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_proximity(&rows);
            self.store_err(result);
        }
    }

    fn on_session_end(&mut self, _stats: &SessionStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
