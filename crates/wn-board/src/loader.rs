//! CSV task-board loader.
//!
//! # CSV format
//!
//! One row per task, in the column order the backend export produces:
//!
//! ```csv
//! task_id,title,address,lat,lon,priority,status,reported_unix_ms
//! 101,Pothole on MG Road,12 MG Road,22.5743,88.4348,high,reported,1755850000000
//! 102,Broken streetlight,45 Park Street,22.5550,88.3512,medium,assigned,1755860000000
//! ```
//!
//! **`priority`** is one of `low`, `medium`, `high`, `urgent`; **`status`**
//! is one of `reported`, `assigned`, `in_progress`, `resolved` (the
//! [`TaskPriority::parse`] / [`TaskStatus::parse`] labels).
//!
//! # Error reporting
//!
//! Shape errors (missing column, non-numeric `lat`) surface through the
//! `csv` crate, which embeds the line number itself.  Semantic errors
//! (out-of-range coordinate, unknown label) are reported with a 1-based CSV
//! line number where line 1 is the header.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wn_core::{Coordinate, TaskId, TaskPriority, TaskStatus, Timestamp};

use crate::board::TaskBoard;
use crate::error::{BoardError, BoardResult};
use crate::task::Task;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TaskRecord {
    task_id:          u64,
    title:            String,
    address:          String,
    lat:              f64,
    lon:              f64,
    priority:         String,
    status:           String,
    reported_unix_ms: i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`TaskBoard`] snapshot from a CSV file.
///
/// `fetched_at` stamps the snapshot; pass the fetch completion time.
pub fn load_tasks_csv(path: &Path, fetched_at: Timestamp) -> BoardResult<TaskBoard> {
    let file = std::fs::File::open(path).map_err(BoardError::Io)?;
    let board = load_tasks_reader(file, fetched_at)?;
    log::info!(
        "loaded {} tasks ({} open) from {}",
        board.len(),
        board.open_count(),
        path.display()
    );
    Ok(board)
}

/// Like [`load_tasks_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from an HTTP
/// response body.
pub fn load_tasks_reader<R: Read>(reader: R, fetched_at: Timestamp) -> BoardResult<TaskBoard> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut tasks: Vec<Task> = Vec::new();

    for (i, result) in csv_reader.deserialize::<TaskRecord>().enumerate() {
        let record = result.map_err(|e| BoardError::Parse(e.to_string()))?;
        // Line 1 is the header, so the first record is line 2.
        tasks.push(record_to_task(record, i + 2)?);
    }

    TaskBoard::new(tasks, fetched_at)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn record_to_task(record: TaskRecord, row: usize) -> BoardResult<Task> {
    let location = Coordinate::new(record.lat, record.lon)
        .map_err(|source| BoardError::InvalidCoordinate { row, source })?;

    let priority = TaskPriority::parse(&record.priority).ok_or_else(|| {
        BoardError::Parse(format!("row {row}: unknown priority {:?}", record.priority))
    })?;

    let status = TaskStatus::parse(&record.status).ok_or_else(|| {
        BoardError::Parse(format!("row {row}: unknown status {:?}", record.status))
    })?;

    Ok(Task {
        id: TaskId(record.task_id),
        title: record.title,
        address: record.address,
        location,
        priority,
        status,
        reported_at: Timestamp(record.reported_unix_ms),
    })
}
