//! Prelude module - common imports for tidycells users
//!
//! ```rust
//! use tidycells::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    BeheadOptions,
    // Cell types
    Cell,
    CellSet,
    CellValue,
    Correspondence,
    DataType,
    Direction,
    EnheadOptions,

    // Error types
    Error,
    // Formats
    Format,
    FormatId,
    FormatPool,
    Position,
    Record,
    Result,
    SpatterOptions,
    ValueSource,
    Warning,
    WideTable,
};

pub use crate::{gather, justify, partition, spatter};

#[cfg(feature = "csv")]
pub use crate::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
