//! # tidycells-core
//!
//! Core data structures for the tidycells unpivoting engine.
//!
//! This crate provides the fundamental types consumed by every stage:
//! - [`Cell`] - A read-only cell: position, typed value and format reference
//! - [`CellValue`] and [`DataType`] - The typed value and its discriminator
//! - [`Position`] - 1-indexed (row, col) coordinates
//! - [`Format`] and [`FormatPool`] - Cell formatting, stored once and referenced by [`FormatId`]
//! - [`RawCell`] - The flat record shape handed over by an external importer
//!
//! ## Example
//!
//! ```rust
//! use tidycells_core::{Cell, CellValue, Format, FormatPool};
//!
//! let mut pool = FormatPool::new();
//! let bold = pool.insert(Format::new().bold(true));
//!
//! let header = Cell::new(1, 1, "Female").unwrap().with_format(bold);
//! let score = Cell::new(2, 1, 8.0).unwrap();
//!
//! assert!(pool.format_of(&header).bold);
//! assert_eq!(score.value(), &CellValue::Number(8.0));
//! ```

pub mod cell;
pub mod error;
pub mod format;

pub use cell::{
    check_unique_positions, Cell, CellError, CellValue, DataType, Position, RawCell,
    SharedString,
};
pub use error::{Error, Result};
pub use format::{BorderLine, Borders, Color, Format, FormatId, FormatPool};
