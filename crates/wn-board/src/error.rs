use thiserror::Error;

use wn_core::{GeoError, TaskId};

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("task CSV parse error: {0}")]
    Parse(String),

    #[error("row {row}: {source}")]
    InvalidCoordinate {
        row: usize,
        #[source]
        source: GeoError,
    },

    #[error("duplicate {0} in board snapshot")]
    DuplicateTask(TaskId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BoardResult<T> = Result<T, BoardError>;
