//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tidycells_core::CellValue;
use tidycells_engine::{Record, WideTable};

use crate::error::CsvResult;
use crate::options::CsvWriteOptions;

/// Writes reshaped output as CSV
pub struct CsvWriter;

impl CsvWriter {
    fn builder<W: Write>(writer: W, options: &CsvWriteOptions) -> csv::Writer<W> {
        csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(options.line_terminator.to_csv())
            .flexible(true)
            .from_writer(writer)
    }

    /// Write a wide table to a CSV file
    pub fn write_wide_file<P: AsRef<Path>>(
        table: &WideTable,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write_wide(table, file, options)
    }

    /// Write a wide table: identifying columns, then one column per key
    ///
    /// Missing values are written as empty fields.
    pub fn write_wide<W: Write>(table: &WideTable, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let mut csv_writer = Self::builder(writer, options);

        if options.write_header && table.column_names().next().is_some() {
            csv_writer.write_record(table.column_names())?;
        }

        for row in table.rows() {
            let fields = row.ids.iter().chain(row.values.iter()).map(render);
            csv_writer.write_record(fields)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Write tidy records to a CSV file
    pub fn write_records_file<P: AsRef<Path>>(
        records: &[Record],
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write_records(records, file, options)
    }

    /// Write tidy records, one line each
    ///
    /// Columns are `row`, `col`, `data_type`, `value`, then every field name
    /// in the order first seen across `records`.
    pub fn write_records<W: Write>(records: &[Record], writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let mut names: Vec<&str> = Vec::new();
        for record in records {
            for name in record.field_names() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        let mut csv_writer = Self::builder(writer, options);

        if options.write_header {
            let header = ["row", "col", "data_type", "value"]
                .into_iter()
                .chain(names.iter().copied());
            csv_writer.write_record(header)?;
        }

        for record in records {
            let mut line = vec![
                record.cell().row().to_string(),
                record.cell().col().to_string(),
                record.cell().data_type().to_string(),
                record.value().to_string(),
            ];
            line.extend(names.iter().map(|name| render(&record.field(name).cloned())));
            csv_writer.write_record(&line)?;
        }

        log::debug!("csv: wrote {} records with {} fields", records.len(), names.len());

        csv_writer.flush()?;
        Ok(())
    }
}

fn render(value: &Option<CellValue>) -> String {
    value.as_ref().map(CellValue::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tidycells_core::Cell;
    use tidycells_engine::WideRow;

    #[test]
    fn test_write_wide() {
        let mut table = WideTable::new(vec!["name".into()], vec!["history".into(), "geography".into()]);
        table
            .push_row(WideRow {
                row: 3,
                ids: vec![Some("matilda".into())],
                values: vec![Some(2.0.into()), None],
            })
            .unwrap();

        let mut out = Vec::new();
        CsvWriter::write_wide(&table, &mut out, &CsvWriteOptions::default()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,history,geography\nmatilda,2,\n"
        );
    }

    #[test]
    fn test_write_records() {
        let records = vec![
            Record::new(Cell::new(3, 2, 2.0).unwrap())
                .with_field("sex", Some("Female".into()))
                .with_field("name", None),
            Record::new(Cell::new(3, 3, "..C").unwrap()).with_field("name", Some("jason".into())),
        ];
        let options = CsvWriteOptions {
            delimiter: b'\t',
            ..CsvWriteOptions::default()
        };

        let mut out = Vec::new();
        CsvWriter::write_records(&records, &mut out, &options).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "row\tcol\tdata_type\tvalue\tsex\tname\n\
             3\t2\tnumeric\t2\tFemale\t\n\
             3\t3\tcharacter\t..C\t\tjason\n"
        );
    }
}
