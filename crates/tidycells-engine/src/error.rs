//! Engine error types

use thiserror::Error;
use tidycells_core::Position;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an engine operation
///
/// Cells that simply have no governing header are not errors; they surface
/// as missing field values and, in strict mode, as
/// [`Warning`](crate::Warning)s.
#[derive(Debug, Error)]
pub enum Error {
    /// Two records land on the same output cell while widening
    #[error("Ambiguous widening: {first} and {second} both map to column '{key}' of the same row")]
    AmbiguousWidening {
        key: String,
        first: Position,
        second: Position,
    },

    /// justify() got different numbers of header and corner cells
    #[error("Cardinality mismatch: {headers} header cells but {corners} corner cells")]
    CardinalityMismatch { headers: usize, corners: usize },

    /// justify() could not pair a header with exactly one corner
    #[error("Ambiguous correspondence at {position}: {message}")]
    AmbiguousCorrespondence { position: Position, message: String },

    /// A value used as a column name is neither text nor a number
    #[error("Type mismatch at {position} in '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        position: Position,
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The key field has no value for a record
    #[error("Missing value for key '{field}' at {position}")]
    MissingKey { position: Position, field: String },

    /// The field is already attached to the collection
    #[error("Field '{0}' already exists")]
    DuplicateField(String),

    /// The field is not attached to any record
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// Direction name that is not one of the compass directions
    #[error("Unknown direction '{0}'")]
    UnknownDirection(String),

    /// A wide row with the wrong number of values
    #[error("Row shape mismatch: expected {expected} values, got {actual}")]
    RowShape { expected: usize, actual: usize },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] tidycells_core::Error),
}
