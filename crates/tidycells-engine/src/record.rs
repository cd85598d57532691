//! Data cells enriched with header values

use tidycells_core::{Cell, CellValue, Position};

use crate::error::{Error, Result};

/// A data cell plus the header values attached to it
///
/// Fields keep the order in which they were attached. A field whose value
/// is `None` was requested but no header governed this cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    cell: Cell,
    fields: Vec<(String, Option<CellValue>)>,
}

impl Record {
    /// A record with no fields yet
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            fields: Vec::new(),
        }
    }

    /// Attach a field, replacing any existing value under the same name
    pub fn with_field<S: Into<String>>(mut self, name: S, value: Option<CellValue>) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    pub fn position(&self) -> Position {
        self.cell.position()
    }

    pub fn value(&self) -> &CellValue {
        self.cell.value()
    }

    /// Value of a field; `None` when the field is absent or unresolved
    pub fn field(&self, name: &str) -> Option<&CellValue> {
        self.field_entry(name).flatten()
    }

    /// Distinguishes an absent field (`None`) from an unresolved one
    /// (`Some(None)`)
    pub fn field_entry(&self, name: &str) -> Option<Option<&CellValue>> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_ref())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Field text, for the common case of text headers
    pub fn field_text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(CellValue::as_text)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&CellValue>)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn into_cell(self) -> Cell {
        self.cell
    }

    pub(crate) fn push_field(&mut self, name: &str, value: Option<CellValue>) {
        self.fields.push((name.to_string(), value));
    }

    pub(crate) fn set_cell(&mut self, cell: Cell) {
        self.cell = cell;
    }

    pub(crate) fn set_field(&mut self, name: &str, value: Option<CellValue>) {
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        }
    }

    pub(crate) fn remove_field(&mut self, name: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|(n, _)| n != name);
        self.fields.len() != before
    }

    pub(crate) fn rename_field(&mut self, from: &str, to: &str) -> bool {
        match self.fields.iter_mut().find(|(n, _)| n == from) {
            Some(slot) => {
                slot.0 = to.to_string();
                true
            }
            None => false,
        }
    }
}

impl From<Cell> for Record {
    fn from(cell: Cell) -> Self {
        Record::new(cell)
    }
}

/// Where a stage reads the value it works on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValueSource {
    /// The data cell's own value
    #[default]
    Cell,
    /// A previously attached field
    Field(String),
}

impl ValueSource {
    pub fn field<S: Into<String>>(name: S) -> Self {
        ValueSource::Field(name.into())
    }

    /// Read the value from a record; `None` when a field is unresolved or
    /// absent from this record
    pub fn read<'r>(&self, record: &'r Record) -> Option<&'r CellValue> {
        match self {
            ValueSource::Cell => Some(record.value()),
            ValueSource::Field(name) => record.field(name),
        }
    }

    /// Fail unless the source exists in at least one of `records`
    pub(crate) fn check<'r, I>(&self, mut records: I) -> Result<()>
    where
        I: Iterator<Item = &'r Record>,
    {
        match self {
            ValueSource::Cell => Ok(()),
            ValueSource::Field(name) => {
                let mut any = false;
                for r in records.by_ref() {
                    any = true;
                    if r.has_field(name) {
                        return Ok(());
                    }
                }
                if any {
                    Err(Error::UnknownField(name.clone()))
                } else {
                    Ok(())
                }
            }
        }
    }

    pub(crate) fn field_name(&self) -> Option<&str> {
        match self {
            ValueSource::Cell => None,
            ValueSource::Field(name) => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_order_and_missing_values() {
        let cell = Cell::new(3, 2, 8.0).unwrap();
        let record = Record::new(cell)
            .with_field("sex", Some(CellValue::text("Female")))
            .with_field("name", None);

        assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["sex", "name"]);
        assert_eq!(record.field_text("sex"), Some("Female"));
        assert_eq!(record.field("name"), None);
        assert_eq!(record.field_entry("name"), Some(None));
        assert_eq!(record.field_entry("subject"), None);
    }

    #[test]
    fn test_with_field_replaces() {
        let record = Record::new(Cell::new(1, 1, 1.0).unwrap())
            .with_field("a", None)
            .with_field("a", Some(CellValue::Number(2.0)));
        assert_eq!(record.fields().count(), 1);
        assert_eq!(record.field("a"), Some(&CellValue::Number(2.0)));
    }

    #[test]
    fn test_value_source() {
        let record = Record::new(Cell::new(1, 1, 5.0).unwrap())
            .with_field("note", Some(CellValue::text("..C")));

        assert_eq!(ValueSource::Cell.read(&record), Some(&CellValue::Number(5.0)));
        assert_eq!(
            ValueSource::field("note").read(&record),
            Some(&CellValue::text("..C"))
        );
        assert!(ValueSource::field("other")
            .check(std::iter::once(&record))
            .is_err());
        assert!(ValueSource::field("other").check(std::iter::empty()).is_ok());
    }
}
