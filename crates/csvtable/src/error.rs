use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("row {index} is out of bounds [0, {len})")]
    RowOutOfRange { index: usize, len: usize },

    #[error("column {index} is out of bounds [0, {len})")]
    ColumnOutOfRange { index: usize, len: usize },

    #[error("column count {count} must not be negative")]
    InvalidColumnCount { count: isize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
