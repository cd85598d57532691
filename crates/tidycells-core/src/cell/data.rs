//! The cell record consumed by every engine stage

use ahash::AHashSet;

use super::{CellValue, DataType, Position};
use crate::error::{Error, Result};
use crate::format::FormatId;

/// A single spreadsheet cell
///
/// Cells are read-only once built. Transforms that need a cell somewhere
/// else, or with a different value, produce a new one through
/// [`Cell::with_position`] or [`Cell::with_value`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    position: Position,
    value: CellValue,
    format_id: FormatId,
}

impl Cell {
    /// Create a cell with the default format
    pub fn new<V: Into<CellValue>>(row: u32, col: u32, value: V) -> Result<Self> {
        Ok(Self::at(Position::new(row, col)?, value))
    }

    /// Create a cell at an already validated position
    pub fn at<V: Into<CellValue>>(position: Position, value: V) -> Self {
        Self {
            position,
            value: value.into(),
            format_id: FormatId::DEFAULT,
        }
    }

    /// Create a blank cell
    pub fn blank(row: u32, col: u32) -> Result<Self> {
        Self::new(row, col, CellValue::Blank)
    }

    /// Set the format reference
    pub fn with_format(mut self, format_id: FormatId) -> Self {
        self.format_id = format_id;
        self
    }

    /// Copy of this cell moved to another position
    pub fn with_position(&self, position: Position) -> Self {
        Self {
            position,
            value: self.value.clone(),
            format_id: self.format_id,
        }
    }

    /// Copy of this cell holding another value
    pub fn with_value<V: Into<CellValue>>(&self, value: V) -> Self {
        Self {
            position: self.position,
            value: value.into(),
            format_id: self.format_id,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> u32 {
        self.position.row
    }

    pub fn col(&self) -> u32 {
        self.position.col
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    pub fn format_id(&self) -> FormatId {
        self.format_id
    }

    pub fn data_type(&self) -> DataType {
        self.value.data_type()
    }

    pub fn is_blank(&self) -> bool {
        self.value.is_blank()
    }
}

/// Fail with [`Error::DuplicatePosition`] if two cells share a position
pub fn check_unique_positions<'a, I>(cells: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Cell>,
{
    let mut seen = AHashSet::new();
    for cell in cells {
        if !seen.insert(cell.position) {
            return Err(Error::DuplicatePosition(cell.position));
        }
    }
    Ok(())
}
