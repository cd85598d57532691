//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Cell`] - A read-only cell as consumed by the engine
//! - [`CellValue`] - The tagged value stored in a cell
//! - [`Position`] - A cell's 1-indexed location
//! - [`RawCell`] - The flat importer record that validates into a [`Cell`]

mod data;
mod position;
mod raw;
mod value;

pub use data::{check_unique_positions, Cell};
pub use position::Position;
pub use raw::RawCell;
pub use value::{CellError, CellValue, DataType, SharedString};
