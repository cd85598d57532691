//! Long to wide and back
//!
//! [`spatter`] widens records so that the values of one field become column
//! names. [`gather`] is its inverse: every present value of a wide table
//! becomes one record again.

use ahash::AHashMap;
use chrono::NaiveDateTime;
use tidycells_core::{Cell, CellError, CellValue, Position, SharedString};

use crate::error::{Error, Result};
use crate::options::SpatterOptions;
use crate::record::Record;

/// One row of a [`WideTable`]
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    /// Data row the values came from
    pub row: u32,
    /// Values of the identifying columns
    pub ids: Vec<Option<CellValue>>,
    /// Values of the widened columns; `None` where no record supplied one
    pub values: Vec<Option<CellValue>>,
}

/// A wide table: identifying columns followed by one column per key value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WideTable {
    id_columns: Vec<String>,
    key_columns: Vec<String>,
    rows: Vec<WideRow>,
}

impl WideTable {
    pub fn new(id_columns: Vec<String>, key_columns: Vec<String>) -> Self {
        Self {
            id_columns,
            key_columns,
            rows: Vec::new(),
        }
    }

    /// Append a row; its value counts must match the column counts
    pub fn push_row(&mut self, row: WideRow) -> Result<()> {
        let expected = self.id_columns.len() + self.key_columns.len();
        let actual = row.ids.len() + row.values.len();
        if row.ids.len() != self.id_columns.len() || row.values.len() != self.key_columns.len() {
            return Err(Error::RowShape { expected, actual });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn id_columns(&self) -> &[String] {
        &self.id_columns
    }

    pub fn key_columns(&self) -> &[String] {
        &self.key_columns
    }

    /// Identifying column names followed by key column names
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.id_columns
            .iter()
            .chain(self.key_columns.iter())
            .map(String::as_str)
    }

    pub fn rows(&self) -> &[WideRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at a row index under a column name
    pub fn get(&self, row_idx: usize, column: &str) -> Option<&CellValue> {
        let row = self.rows.get(row_idx)?;
        if let Some(i) = self.id_columns.iter().position(|c| c == column) {
            return row.ids[i].as_ref();
        }
        let j = self.key_columns.iter().position(|c| c == column)?;
        row.values[j].as_ref()
    }
}

/// Hashable stand-in for a cell value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ValueKey {
    Blank,
    Text(SharedString),
    Number(u64),
    Boolean(bool),
    DateTime(NaiveDateTime),
    Error(CellError),
}

impl From<&CellValue> for ValueKey {
    fn from(value: &CellValue) -> Self {
        match value {
            CellValue::Blank => ValueKey::Blank,
            CellValue::Text(s) => ValueKey::Text(s.clone()),
            // -0.0 and 0.0 are the same group
            CellValue::Number(n) if *n == 0.0 => ValueKey::Number(0),
            CellValue::Number(n) => ValueKey::Number(n.to_bits()),
            CellValue::Boolean(b) => ValueKey::Boolean(*b),
            CellValue::DateTime(d) => ValueKey::DateTime(*d),
            CellValue::Error(e) => ValueKey::Error(*e),
        }
    }
}

type GroupKey = (u32, Vec<Option<ValueKey>>);

/// Widen `records` on `key_field`, taking values from the data cells
///
/// Equivalent to [`spatter_with`] with default options.
pub fn spatter(records: &[Record], key_field: &str) -> Result<WideTable> {
    spatter_with(records, key_field, &SpatterOptions::default())
}

/// Widen `records` on `key_field`
///
/// A row group is the data row together with the values of every field
/// other than the key (and other than the value field, when values come from
/// one). Each distinct key value becomes a column; columns and rows keep the
/// order in which they are first seen. Values keep their own type, so a
/// column may hold text in one row and a number in the next.
///
/// # Errors
///
/// - [`Error::MissingKey`] when a record has no key value
/// - [`Error::TypeMismatch`] when a key value is neither text nor a number
/// - [`Error::AmbiguousWidening`] when two records land on the same row and
///   column
/// - [`Error::UnknownField`] when the key or value field is attached to no
///   record
/// - [`Error::DuplicateField`] when a key value equals the name of an
///   identifying column
pub fn spatter_with(records: &[Record], key_field: &str, options: &SpatterOptions) -> Result<WideTable> {
    if records.is_empty() {
        return Ok(WideTable::default());
    }
    if !records.iter().any(|r| r.has_field(key_field)) {
        return Err(Error::UnknownField(key_field.to_string()));
    }
    options.values.check(records.iter())?;
    let value_field = options.values.field_name();

    let mut id_columns: Vec<String> = Vec::new();
    for record in records {
        for name in record.field_names() {
            if name != key_field && Some(name) != value_field && !id_columns.iter().any(|c| c == name) {
                id_columns.push(name.to_string());
            }
        }
    }

    let mut table = WideTable::new(id_columns, Vec::new());
    let mut key_index: AHashMap<String, usize> = AHashMap::new();
    let mut group_index: AHashMap<GroupKey, usize> = AHashMap::new();
    let mut placed: AHashMap<(usize, usize), Position> = AHashMap::new();
    // Values are collected sparsely and laid out once all columns are known
    let mut cells: Vec<Vec<(usize, Option<CellValue>)>> = Vec::new();

    for record in records {
        let position = record.position();
        let key = column_name(record, key_field)?;

        let col = match key_index.get(&key) {
            Some(&j) => j,
            None => {
                if table.id_columns.iter().any(|c| *c == key) {
                    return Err(Error::DuplicateField(key));
                }
                let j = table.key_columns.len();
                key_index.insert(key.clone(), j);
                table.key_columns.push(key.clone());
                j
            }
        };

        let ids: Vec<Option<CellValue>> = table
            .id_columns
            .iter()
            .map(|name| record.field(name).cloned())
            .collect();
        let group: GroupKey = (
            record.cell().row(),
            ids.iter().map(|v| v.as_ref().map(ValueKey::from)).collect(),
        );

        let row_idx = match group_index.get(&group) {
            Some(&i) => i,
            None => {
                let i = table.rows.len();
                group_index.insert(group, i);
                table.rows.push(WideRow {
                    row: record.cell().row(),
                    ids,
                    values: Vec::new(),
                });
                cells.push(Vec::new());
                i
            }
        };

        if let Some(first) = placed.insert((row_idx, col), position) {
            return Err(Error::AmbiguousWidening {
                key,
                first,
                second: position,
            });
        }
        cells[row_idx].push((col, options.values.read(record).cloned()));
    }

    let width = table.key_columns.len();
    for (row, row_cells) in table.rows.iter_mut().zip(cells) {
        row.values = vec![None; width];
        for (col, value) in row_cells {
            row.values[col] = value;
        }
    }

    log::debug!(
        "spatter '{}': {} records into {} rows x {} columns",
        key_field,
        records.len(),
        table.rows.len(),
        width
    );

    Ok(table)
}

fn column_name(record: &Record, key_field: &str) -> Result<String> {
    let position = record.position();
    match record.field(key_field) {
        Some(CellValue::Text(s)) => Ok(s.as_str().to_string()),
        Some(v @ CellValue::Number(_)) => Ok(v.to_string()),
        Some(other) => Err(Error::TypeMismatch {
            position,
            field: key_field.to_string(),
            expected: "character or numeric",
            actual: other.type_name(),
        }),
        None => Err(Error::MissingKey {
            position,
            field: key_field.to_string(),
        }),
    }
}

/// Lengthen a wide table back into records
///
/// Every present value at row `r` and key column `j` becomes a record at
/// row `r`, column `ids + j + 1`, carrying the identifying fields plus
/// `variable_field` set to the column name. Missing values produce no record.
///
/// Wide rows that share a data row (they differ only in their identifying
/// values) are laid out side by side: the `k`-th such row starts `k` key
/// widths further right, so no two records share a position. Spattering the
/// result on `variable_field` regroups them by their identifying values.
pub fn gather(table: &WideTable, variable_field: &str) -> Result<Vec<Record>> {
    if table.id_columns.iter().any(|c| c == variable_field) {
        return Err(Error::DuplicateField(variable_field.to_string()));
    }

    let offset = table.id_columns.len() as u64;
    let width = table.key_columns.len() as u64;
    let mut bands: AHashMap<u32, u64> = AHashMap::new();
    let mut records = Vec::new();

    for row in &table.rows {
        let band = bands.entry(row.row).or_insert(0);
        let start = offset + *band * width;
        *band += 1;

        for (j, (name, value)) in table.key_columns.iter().zip(&row.values).enumerate() {
            let Some(value) = value else {
                continue;
            };
            let col = u32::try_from(start + j as u64 + 1).map_err(|_| {
                tidycells_core::Error::InvalidPosition {
                    row: row.row,
                    col: u32::MAX,
                }
            })?;
            let cell = Cell::new(row.row, col, value.clone())?;
            let mut record = Record::new(cell);
            for (id, id_value) in table.id_columns.iter().zip(&row.ids) {
                record.push_field(id, id_value.clone());
            }
            record.push_field(variable_field, Some(CellValue::text(name)));
            records.push(record);
        }
    }

    log::debug!(
        "gather '{}': {} rows into {} records",
        variable_field,
        table.rows.len(),
        records.len()
    );

    Ok(records)
}
