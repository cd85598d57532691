//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// More rows or columns than a cell position can address
    #[error("Grid too large: record {record}, field {field}")]
    TooLarge { record: usize, field: usize },

    /// Engine error
    #[error("Engine error: {0}")]
    Engine(#[from] tidycells_engine::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] tidycells_core::Error),
}
