//! Error types for tidycells-core

use thiserror::Error;

use crate::cell::Position;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tidycells-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row or column index of zero (positions are 1-indexed)
    #[error("Invalid position: row {row}, column {col} (both must be >= 1)")]
    InvalidPosition { row: u32, col: u32 },

    /// Two cells in one collection share a position
    #[error("Duplicate cell at {0}")]
    DuplicatePosition(Position),

    /// An importer record whose discriminator disagrees with its populated value
    #[error("Invalid cell record at {position}: {message}")]
    InvalidCellRecord { position: Position, message: String },

    /// Format reference not present in the pool
    #[error("Invalid format id: {0}")]
    InvalidFormatId(u32),

    /// Invalid A1-style address
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
