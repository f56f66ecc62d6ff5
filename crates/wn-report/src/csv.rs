//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `fix_trace.csv`
//! - `proximity.csv`
//!
//! Coordinates are written with six decimals (centimetre scale); distances
//! with one decimal, matching what the task list displays.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{FixTraceRow, ProximitySnapshotRow, ReportResult};

/// Writes session traces to two CSV files.
pub struct CsvReporter {
    fixes:     Writer<File>,
    proximity: Writer<File>,
    finished:  bool,
}

impl CsvReporter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut fixes = Writer::from_path(dir.join("fix_trace.csv"))?;
        fixes.write_record(["time_unix_ms", "worker_id", "lat", "lon", "accuracy_m", "disposition"])?;

        let mut proximity = Writer::from_path(dir.join("proximity.csv"))?;
        proximity.write_record(["time_unix_ms", "worker_id", "task_id", "rank", "distance_km", "eta_min"])?;

        Ok(Self {
            fixes,
            proximity,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReporter {
    fn write_fix(&mut self, row: &FixTraceRow) -> ReportResult<()> {
        self.fixes.write_record(&[
            row.time_unix_ms.to_string(),
            row.worker_id.to_string(),
            format!("{:.6}", row.lat),
            format!("{:.6}", row.lon),
            // Empty field when the provider gave no estimate.
            row.accuracy_m.map_or_else(String::new, |a| format!("{a:.1}")),
            row.disposition.as_str().to_string(),
        ])?;
        Ok(())
    }

    fn write_proximity(&mut self, rows: &[ProximitySnapshotRow]) -> ReportResult<()> {
        for row in rows {
            self.proximity.write_record(&[
                row.time_unix_ms.to_string(),
                row.worker_id.to_string(),
                row.task_id.to_string(),
                row.rank.to_string(),
                format!("{:.1}", row.distance_km),
                row.eta_min.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.fixes.flush()?;
        self.proximity.flush()?;
        Ok(())
    }
}
