//! `wn-board` — the municipal task board: snapshot, CSV ingestion, and
//! spatial lookup.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`task`]    | `Task` record                                             |
//! | [`board`]   | `TaskBoard` immutable snapshot                            |
//! | [`index`]   | `TaskIndex` R-tree over task locations                    |
//! | [`loader`]  | `load_tasks_csv`, `load_tasks_reader`                     |
//! | [`error`]   | `BoardError`, `BoardResult<T>`                            |
//!
//! # Snapshot model (summary)
//!
//! The backend owns the task list; this crate holds a read-only snapshot of
//! it.  A fetch produces a `TaskBoard` stamped with its fetch time, and an
//! optional `TaskIndex` built over the snapshot's open tasks.  Refreshing
//! replaces both wholesale; nothing here mutates in place.

pub mod board;
pub mod error;
pub mod index;
pub mod loader;
pub mod task;

#[cfg(test)]
mod tests;

pub use board::TaskBoard;
pub use error::{BoardError, BoardResult};
pub use index::TaskIndex;
pub use loader::{load_tasks_csv, load_tasks_reader};
pub use task::Task;
