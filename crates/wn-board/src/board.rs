//! In-memory snapshot of the municipal work board.
//!
//! The backend owns the data; the client periodically fetches a full snapshot
//! and works against it offline.  A snapshot is immutable once built, so the
//! tracking loop can hold a shared reference without locks.  Refreshing means
//! building a new `TaskBoard` and swapping it in.

use wn_core::{TaskId, TaskStatus, Timestamp};

use crate::error::{BoardError, BoardResult};
use crate::task::Task;

#[cfg(feature = "fx-hash")]
type IdMap = rustc_hash::FxHashMap<TaskId, usize>;
#[cfg(not(feature = "fx-hash"))]
type IdMap = std::collections::HashMap<TaskId, usize>;

/// An immutable snapshot of the task list, indexed by `TaskId`.
///
/// # Example
///
/// ```
/// use wn_core::{Coordinate, TaskId, TaskPriority, TaskStatus, Timestamp};
/// use wn_board::{Task, TaskBoard};
///
/// let pothole = Task {
///     id:          TaskId(1),
///     title:       "Pothole on MG Road".into(),
///     address:     "12 MG Road".into(),
///     location:    Coordinate::new(22.5743, 88.4348).unwrap(),
///     priority:    TaskPriority::High,
///     status:      TaskStatus::Reported,
///     reported_at: Timestamp::ZERO,
/// };
/// let board = TaskBoard::new(vec![pothole], Timestamp::from_unix_secs(100)).unwrap();
/// assert_eq!(board.len(), 1);
/// assert!(board.get(TaskId(1)).is_some());
/// ```
#[derive(Debug)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    by_id: IdMap,
    fetched_at: Timestamp,
}

impl TaskBoard {
    /// Build a snapshot from fetched records.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateTask`] if two records share an id; a
    /// snapshot with ambiguous ids would make every downstream lookup
    /// unreliable.
    pub fn new(tasks: Vec<Task>, fetched_at: Timestamp) -> BoardResult<Self> {
        let mut by_id = IdMap::default();
        by_id.reserve(tasks.len());

        for (i, task) in tasks.iter().enumerate() {
            if by_id.insert(task.id, i).is_some() {
                return Err(BoardError::DuplicateTask(task.id));
            }
        }

        Ok(Self { tasks, by_id, fetched_at })
    }

    /// A snapshot with no tasks, stamped [`Timestamp::ZERO`].
    ///
    /// Useful as a placeholder before the first fetch completes.
    pub fn empty() -> Self {
        Self {
            tasks:      Vec::new(),
            by_id:      IdMap::default(),
            fetched_at: Timestamp::ZERO,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks still needing a site visit.
    pub fn open_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_open()).count()
    }

    pub fn count_with_status(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Look up a task by id.
    #[inline]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.by_id.get(&id).map(|&i| &self.tasks[i])
    }

    #[inline]
    pub fn contains(&self, id: TaskId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All tasks in fetch order.
    #[inline]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Iterator over tasks that still need a site visit.  This is the set
    /// the proximity table ranks.
    pub fn open_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_open())
    }

    // ── Snapshot age ──────────────────────────────────────────────────────

    /// When this snapshot was fetched.
    pub fn fetched_at(&self) -> Timestamp {
        self.fetched_at
    }

    /// Milliseconds between the fetch and `now`, saturating at zero.
    pub fn age_ms(&self, now: Timestamp) -> i64 {
        now.millis_since(self.fetched_at)
    }
}
