//! The task record.

use wn_core::{Coordinate, TaskId, TaskPriority, TaskStatus, Timestamp};

/// One reported issue, as last fetched from the municipal backend.
///
/// Fields are `pub`: this is a plain data record and every consumer (board,
/// index, proximity table, exports) reads it directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    /// Backend-assigned id, unique within one board snapshot.
    pub id: TaskId,
    /// Short human-readable summary ("Pothole on MG Road").
    pub title: String,
    /// Free-form street address entered by the reporter.
    pub address: String,
    /// Geocoded report site.
    pub location: Coordinate,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// When the citizen filed the report.
    pub reported_at: Timestamp,
}

impl Task {
    /// `true` while the task still needs a site visit.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}
