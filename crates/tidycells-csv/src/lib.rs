//! # tidycells-csv
//!
//! CSV boundary for tidycells: reads a delimited grid into the cell
//! collection the engine works on, and writes tidy records or wide tables
//! back out.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
