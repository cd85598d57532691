//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tidycells_core::{Cell, CellValue};

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

/// Reads a delimited grid into cells
///
/// Every field becomes a cell at (record number, field number), both
/// 1-based. Label rows are kept: the engine treats them as header cells.
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into cells
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Vec<Cell>> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into cells, in row-major order
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Vec<Cell>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut cells = Vec::new();
        let mut width = 0usize;

        for (r, result) in csv_reader.records().enumerate() {
            let record = result?;
            let label_row = r == 0 && options.has_header;
            width = width.max(record.len());

            for (c, field) in record.iter().enumerate() {
                if field.is_empty() && !options.keep_blank {
                    continue;
                }
                let value = if field.is_empty() {
                    CellValue::Blank
                } else if options.auto_detect_types && !label_row {
                    Self::detect_type(field)
                } else {
                    CellValue::text(field)
                };

                let (row, col) = match (u32::try_from(r + 1), u32::try_from(c + 1)) {
                    (Ok(row), Ok(col)) => (row, col),
                    _ => return Err(CsvError::TooLarge { record: r, field: c }),
                };
                cells.push(Cell::new(row, col, value)?);
            }
        }

        log::debug!("csv: read {} cells, {} columns wide", cells.len(), width);

        Ok(cells)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Blank;
        }

        match trimmed.to_lowercase().as_str() {
            "true" => return CellValue::Boolean(true),
            "false" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }

        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
            return CellValue::DateTime(dt);
        }
        if let Some(dt) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return CellValue::DateTime(dt);
        }

        // Markers such as "..C" or "…" stay text, untrimmed
        CellValue::text(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tidycells_core::DataType;

    fn read(text: &str, options: &CsvReadOptions) -> Vec<Cell> {
        CsvReader::read(text.as_bytes(), options).unwrap()
    }

    #[test]
    fn test_positions_and_types() {
        let cells = read(
            ",2019,2020\napples,10,..C\npears,true,2020-03-01\n",
            &CsvReadOptions::default(),
        );

        let summary: Vec<(String, DataType)> = cells
            .iter()
            .map(|c| (c.position().to_string(), c.data_type()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("A1".to_string(), DataType::Blank),
                ("B1".to_string(), DataType::Character),
                ("C1".to_string(), DataType::Character),
                ("A2".to_string(), DataType::Character),
                ("B2".to_string(), DataType::Numeric),
                ("C2".to_string(), DataType::Character),
                ("A3".to_string(), DataType::Character),
                ("B3".to_string(), DataType::Logical),
                ("C3".to_string(), DataType::Date),
            ]
        );
    }

    #[test]
    fn test_skip_blanks_and_no_header() {
        let options = CsvReadOptions {
            has_header: false,
            keep_blank: false,
            ..CsvReadOptions::default()
        };
        let cells = read("1,,3\n", &options);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].value(), &CellValue::Number(1.0));
        assert_eq!(cells[1].col(), 3);
    }

    #[test]
    fn test_ragged_rows_and_plain_text() {
        let options = CsvReadOptions {
            auto_detect_types: false,
            ..CsvReadOptions::default()
        };
        let cells = read("a\nb;1,2\n", &options);

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].value().as_text(), Some("2"));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let options = CsvReadOptions {
            delimiter: b';',
            has_header: false,
            ..CsvReadOptions::default()
        };
        let cells = read("x;1.5\n", &options);
        assert_eq!(cells[1].value(), &CellValue::Number(1.5));
    }
}
