//! # tidycells-engine
//!
//! Turns pivot-table cells into tidy records.
//!
//! The caller splits a sheet's cells into data cells and one or more header
//! collections (by position, format or content). The engine then attaches
//! to every data cell the value of the header that governs it in a given
//! compass [`Direction`]:
//!
//! - [`CellSet::enhead`] joins data against an explicit header collection
//! - [`CellSet::behead`] peels the outermost header row or column off the
//!   set itself, level by level
//! - [`justify`] moves centered headers onto block corners first
//! - [`spatter`] and [`gather`] reshape between long and wide form
//! - [`CellSet::isolate_sentinels`] moves markers like `"..C"` out of the
//!   value column
//! - [`partition`] splits a sheet holding several tables
//!
//! Every stage is a pure transform: it consumes its input and returns a new
//! collection.
//!
//! ## Example
//!
//! ```
//! use tidycells_core::{Cell, CellValue};
//! use tidycells_engine::{CellSet, Direction};
//!
//! # fn main() -> tidycells_engine::Result<()> {
//! let cells = vec![
//!     Cell::new(1, 2, "2019")?,
//!     Cell::new(1, 3, "2020")?,
//!     Cell::new(2, 1, "apples")?,
//!     Cell::new(2, 2, 10.0)?,
//!     Cell::new(2, 3, 12.0)?,
//! ];
//!
//! let tidy = CellSet::new(cells)?
//!     .behead(Direction::N, "year")?
//!     .behead(Direction::W, "fruit")?;
//!
//! let last = &tidy.records()[1];
//! assert_eq!(last.value(), &CellValue::Number(12.0));
//! assert_eq!(last.field_text("year"), Some("2020"));
//! assert_eq!(last.field_text("fruit"), Some("apples"));
//! # Ok(())
//! # }
//! ```

pub mod cellset;
pub mod direction;
pub mod error;
pub mod justify;
pub mod options;
pub mod partition;
pub mod record;
pub mod reshape;
pub mod resolver;
mod sentinel;
pub mod warning;

pub use cellset::CellSet;
pub use direction::{Direction, Family, Side};
pub use error::{Error, Result};
pub use justify::{justify, Correspondence};
pub use options::{BeheadOptions, EnheadOptions, SpatterOptions};
pub use partition::{partition, Partition};
pub use record::{Record, ValueSource};
pub use reshape::{gather, spatter, spatter_with, WideRow, WideTable};
pub use resolver::{resolve, HeaderIndex};
pub use warning::Warning;
