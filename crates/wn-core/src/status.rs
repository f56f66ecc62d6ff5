//! Task status and priority enums shared across the board and tracking
//! crates.
//!
//! The backend owns the status transition rules; the client only reads the
//! current value from a snapshot.  All variants are always compiled in.

// ── TaskStatus ────────────────────────────────────────────────────────────────

/// Lifecycle state of a reported issue, as last fetched from the backend.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TaskStatus {
    /// Freshly reported by a citizen, not yet assigned (default state).
    #[default]
    Reported,
    /// Assigned to a worker, not started.
    Assigned,
    /// A worker is actively on it.
    InProgress,
    /// Work completed and confirmed.
    Resolved,
}

impl TaskStatus {
    /// `true` for any status that still needs a site visit.  These are the
    /// tasks the proximity table ranks.
    #[inline]
    pub fn is_open(self) -> bool {
        !matches!(self, TaskStatus::Resolved)
    }

    /// Stable lowercase label, matching the backend export and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Reported   => "reported",
            TaskStatus::Assigned   => "assigned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Resolved   => "resolved",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).  Returns `None` for labels this
    /// client version does not know.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reported"    => Some(TaskStatus::Reported),
            "assigned"    => Some(TaskStatus::Assigned),
            "in_progress" => Some(TaskStatus::InProgress),
            "resolved"    => Some(TaskStatus::Resolved),
            _             => None,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TaskPriority ──────────────────────────────────────────────────────────────

/// Urgency of a task.  `Ord` follows declaration order, so
/// `Low < Medium < High < Urgent` and sorting descending puts urgent work
/// first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    /// Stable lowercase label, matching the backend export and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low    => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High   => "high",
            TaskPriority::Urgent => "urgent",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low"    => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high"   => Some(TaskPriority::High),
            "urgent" => Some(TaskPriority::Urgent),
            _        => None,
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
