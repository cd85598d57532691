//! Importer record shape
//!
//! External spreadsheet importers report one flat record per cell: a data
//! type discriminator plus one optional slot per value type, of which at most
//! one is populated. [`RawCell`] mirrors that layout so the hand-off can be
//! deserialized directly, and validates into a [`Cell`].

use chrono::NaiveDateTime;

use super::{Cell, CellError, CellValue, DataType, Position};
use crate::error::{Error, Result};
use crate::format::FormatId;

/// A cell exactly as reported by an importer
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawCell {
    pub row: u32,
    pub col: u32,
    pub data_type: Option<DataType>,
    pub character: Option<String>,
    pub numeric: Option<f64>,
    pub logical: Option<bool>,
    pub date: Option<NaiveDateTime>,
    pub error: Option<String>,
    pub is_blank: bool,
    pub format_id: u32,
}

impl TryFrom<RawCell> for Cell {
    type Error = Error;

    fn try_from(raw: RawCell) -> Result<Cell> {
        let position = Position::new(raw.row, raw.col)?;
        let invalid = |message: String| Error::InvalidCellRecord { position, message };

        let mut populated = Vec::with_capacity(1);
        if let Some(s) = raw.character {
            populated.push(CellValue::text(s));
        }
        if let Some(n) = raw.numeric {
            populated.push(CellValue::Number(n));
        }
        if let Some(b) = raw.logical {
            populated.push(CellValue::Boolean(b));
        }
        if let Some(d) = raw.date {
            populated.push(CellValue::DateTime(d));
        }
        if let Some(e) = raw.error {
            let err: CellError = e
                .parse()
                .map_err(|_| invalid(format!("unknown error value '{}'", e)))?;
            populated.push(CellValue::Error(err));
        }

        if populated.len() > 1 {
            return Err(invalid(format!(
                "{} value slots populated, expected at most one",
                populated.len()
            )));
        }

        let value = populated.pop().unwrap_or(CellValue::Blank);
        if raw.is_blank && !value.is_blank() {
            return Err(invalid(format!(
                "flagged blank but holds a {} value",
                value.type_name()
            )));
        }

        if let Some(declared) = raw.data_type {
            if declared != value.data_type() {
                return Err(invalid(format!(
                    "declared {} but holds a {} value",
                    declared,
                    value.type_name()
                )));
            }
        }

        Ok(Cell::at(position, value).with_format(FormatId(raw.format_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(row: u32, col: u32) -> RawCell {
        RawCell {
            row,
            col,
            ..Default::default()
        }
    }

    #[test]
    fn test_text_record() {
        let cell = Cell::try_from(RawCell {
            data_type: Some(DataType::Character),
            character: Some("matilda".into()),
            format_id: 3,
            ..raw(2, 2)
        })
        .unwrap();

        assert_eq!(cell.value().as_text(), Some("matilda"));
        assert_eq!(cell.format_id(), FormatId(3));
    }

    #[test]
    fn test_blank_record() {
        let cell = Cell::try_from(RawCell {
            is_blank: true,
            data_type: Some(DataType::Blank),
            ..raw(1, 1)
        })
        .unwrap();
        assert!(cell.is_blank());
    }

    #[test]
    fn test_error_record() {
        let cell = Cell::try_from(RawCell {
            error: Some("#N/A".into()),
            ..raw(1, 1)
        })
        .unwrap();
        assert_eq!(cell.value(), &CellValue::Error(CellError::Na));
    }

    #[test]
    fn test_two_slots_rejected() {
        let result = Cell::try_from(RawCell {
            character: Some("8".into()),
            numeric: Some(8.0),
            ..raw(3, 2)
        });
        assert!(matches!(result, Err(Error::InvalidCellRecord { .. })));
    }

    #[test]
    fn test_discriminator_mismatch_rejected() {
        let result = Cell::try_from(RawCell {
            data_type: Some(DataType::Numeric),
            character: Some("8".into()),
            ..raw(3, 2)
        });
        match result {
            Err(Error::InvalidCellRecord { position, message }) => {
                assert_eq!(position.to_string(), "B3");
                assert!(message.contains("numeric"));
            }
            other => panic!("expected invalid record, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_flag_with_value_rejected() {
        let result = Cell::try_from(RawCell {
            is_blank: true,
            numeric: Some(1.0),
            ..raw(1, 1)
        });
        assert!(result.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_importer_json() {
        let json = r#"{"row": 3, "col": 2, "data_type": "numeric", "numeric": 8.0, "format_id": 1}"#;
        let raw: RawCell = serde_json::from_str(json).unwrap();
        let cell = Cell::try_from(raw).unwrap();
        assert_eq!(cell.value().as_number(), Some(8.0));
    }
}
