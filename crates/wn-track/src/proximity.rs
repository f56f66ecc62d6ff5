//! The ranked distance/ETA table.
//!
//! One row per open task, recomputed from scratch on every accepted fix.
//! With tens of tasks a full recompute is microseconds; there is nothing to
//! gain from incremental updates, and a rebuild can never drift out of sync
//! with the board.

use wn_board::TaskBoard;
use wn_core::{Coordinate, Eta, TaskId, TravelProfile};

/// One line of the worker's task list: how far, how long.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProximityRow {
    pub task_id: TaskId,
    /// Great-circle distance from the worker's position, full precision.
    pub distance_km: f64,
    pub eta: Eta,
}

/// All proximity rows, ascending by distance.
///
/// Ties break on `TaskId`, so two tasks at the same site always list in the
/// same order regardless of board fetch order.
#[derive(Default)]
pub struct ProximityTable {
    rows: Vec<ProximityRow>,
}

impl ProximityTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Rebuild every row for the open tasks of `board` as seen from
    /// `position`.
    ///
    /// With the `parallel` Cargo feature the per-task distance math runs on
    /// Rayon's thread pool; the final sort keeps the result identical to the
    /// serial path.
    pub fn recompute(&mut self, board: &TaskBoard, position: Coordinate, profile: TravelProfile) {
        self.rows.clear();

        #[cfg(not(feature = "parallel"))]
        {
            self.rows.extend(board.open_tasks().map(|t| {
                let distance_km = position.distance_km(t.location);
                ProximityRow { task_id: t.id, distance_km, eta: profile.eta(distance_km) }
            }));
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let mut rows: Vec<ProximityRow> = board
                .tasks()
                .par_iter()
                .filter(|t| t.is_open())
                .map(|t| {
                    let distance_km = position.distance_km(t.location);
                    ProximityRow { task_id: t.id, distance_km, eta: profile.eta(distance_km) }
                })
                .collect();
            self.rows.append(&mut rows);
        }

        self.rows
            .sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km).then(a.task_id.cmp(&b.task_id)));
    }

    /// Drop all rows (used when the board is replaced before any fix).
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Rows ascending by distance.
    #[inline]
    pub fn rows(&self) -> &[ProximityRow] {
        &self.rows
    }

    /// The closest open task, if the table has any rows.
    #[inline]
    pub fn nearest(&self) -> Option<&ProximityRow> {
        self.rows.first()
    }

    /// Row for a specific task.  Linear scan; the table is small.
    pub fn row_for(&self, id: TaskId) -> Option<&ProximityRow> {
        self.rows.iter().find(|r| r.task_id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
