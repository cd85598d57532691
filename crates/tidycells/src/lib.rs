//! # tidycells
//!
//! Turns pivot-table spreadsheet cells into tidy records.
//!
//! Pivot tables encode variables positionally: a value's meaning comes from
//! the header cells above it and to its left, often across several nested
//! header levels. tidycells works on individual cells (position, typed value
//! and format) and lets you describe where each header level sits relative
//! to the data, then produces one record per data cell with a field per
//! header level.
//!
//! ## Features
//!
//! - Sixteen compass directions, from exact `N`/`W` to corner-anchored
//!   `NNW`/`WNW` and naive proximity
//! - `behead` to peel header levels off a sheet one by one
//! - `justify` for headers centered over their block
//! - Long/wide reshaping with `spatter` and `gather`
//! - CSV input and output (feature `csv`, on by default)
//!
//! ## Example
//!
//! ```rust
//! use tidycells::prelude::*;
//!
//! let text = ",Female,,Male,\n\
//!             ,matilda,jason,ulysses,felicity\n\
//!             history,2,8,7,4\n";
//! let cells = CsvReader::read(text.as_bytes(), &CsvReadOptions::default()).unwrap();
//!
//! let tidy = CellSet::new(cells)
//!     .unwrap()
//!     .behead(Direction::NNW, "sex")
//!     .unwrap()
//!     .behead(Direction::N, "name")
//!     .unwrap()
//!     .behead(Direction::W, "subject")
//!     .unwrap();
//!
//! let ulysses = &tidy.records()[2];
//! assert_eq!(ulysses.field_text("sex"), Some("Male"));
//! assert_eq!(ulysses.field_text("name"), Some("ulysses"));
//! assert_eq!(ulysses.value(), &CellValue::Number(7.0));
//! ```

pub mod prelude;

// Re-export core types
pub use tidycells_core::{
    check_unique_positions,
    BorderLine,
    Borders,
    // Cell types
    Cell,
    CellError,
    CellValue,
    Color,
    DataType,
    // Format types
    Format,
    FormatId,
    FormatPool,
    Position,
    RawCell,
    SharedString,
};

/// Errors from building cells and formats
pub use tidycells_core::Error as CoreError;

// Re-export engine types
pub use tidycells_engine::{
    gather, justify, partition, resolve, spatter, spatter_with, BeheadOptions, CellSet,
    Correspondence, Direction, EnheadOptions, Error, Family, HeaderIndex, Partition, Record,
    Result, Side, SpatterOptions, ValueSource, Warning, WideRow, WideTable,
};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use tidycells_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};

/// Read a CSV file into cells with default options
#[cfg(feature = "csv")]
pub fn read_csv_cells<P: AsRef<std::path::Path>>(path: P) -> CsvResult<Vec<Cell>> {
    CsvReader::read_file(path, &CsvReadOptions::default())
}

/// Read a CSV file straight into a [`CellSet`]
#[cfg(feature = "csv")]
pub fn read_csv_set<P: AsRef<std::path::Path>>(path: P) -> CsvResult<CellSet> {
    Ok(CellSet::new(read_csv_cells(path)?)?)
}
