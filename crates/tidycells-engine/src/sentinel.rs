//! Separating sentinel markers from real values
//!
//! Published tables often put markers such as `"…"` or `"..C"` where a
//! number is suppressed. Left in place, a marker turns a numeric column into
//! a mixed one.

use tidycells_core::CellValue;

use crate::cellset::CellSet;
use crate::error::Result;
use crate::record::ValueSource;

impl CellSet {
    /// Move sentinel values into their own field
    ///
    /// For every record whose value (read from `source`) equals one of
    /// `sentinels`, that value is cleared and copied into the new field
    /// `into`: a cell value becomes [`CellValue::Blank`], a field value
    /// becomes missing. All other records get a missing `into` and are left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateField`](crate::Error::DuplicateField) when `into`
    /// is already attached, [`Error::UnknownField`](crate::Error::UnknownField)
    /// when `source` names a field that no record has.
    ///
    /// # Examples
    /// ```
    /// use tidycells_core::{Cell, CellValue};
    /// use tidycells_engine::{CellSet, ValueSource};
    ///
    /// let cells = vec![
    ///     Cell::new(1, 1, 12.5).unwrap(),
    ///     Cell::new(1, 2, "..C").unwrap(),
    /// ];
    /// let set = CellSet::new(cells)
    ///     .unwrap()
    ///     .isolate_sentinels(&ValueSource::Cell, ["…", "..C"], "sentinel")
    ///     .unwrap();
    ///
    /// let records = set.records();
    /// assert_eq!(records[0].value(), &CellValue::Number(12.5));
    /// assert_eq!(records[0].field("sentinel"), None);
    /// assert!(records[1].value().is_blank());
    /// assert_eq!(records[1].field_text("sentinel"), Some("..C"));
    /// ```
    pub fn isolate_sentinels<I, V>(mut self, source: &ValueSource, sentinels: I, into: &str) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.ensure_new_field(into)?;
        source.check(self.iter())?;

        let sentinels: Vec<CellValue> = sentinels.into_iter().map(Into::into).collect();
        let mut isolated = 0usize;

        for record in self.records_mut() {
            let hit = source
                .read(record)
                .filter(|v| sentinels.contains(v))
                .cloned();

            if hit.is_some() {
                isolated += 1;
                match source {
                    ValueSource::Cell => {
                        let cleared = record.cell().with_value(CellValue::Blank);
                        record.set_cell(cleared);
                    }
                    ValueSource::Field(name) => record.set_field(name, None),
                }
            }
            record.push_field(into, hit);
        }

        log::debug!(
            "isolate_sentinels into '{}': {} of {} records",
            into,
            isolated,
            self.len()
        );

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::error::Error;
    use tidycells_core::Cell;

    fn cells() -> Vec<Cell> {
        vec![
            Cell::new(1, 1, "region").unwrap(),
            Cell::new(2, 1, 3.5).unwrap(),
            Cell::new(3, 1, "…").unwrap(),
            Cell::new(4, 1, "..C").unwrap(),
            Cell::new(5, 1, "n/a").unwrap(),
        ]
    }

    #[test]
    fn test_cell_values_are_cleared() {
        let set = CellSet::new(cells())
            .unwrap()
            .isolate_sentinels(&ValueSource::Cell, ["…", "..C"], "sentinel")
            .unwrap();

        let summary: Vec<(String, Option<&str>)> = set
            .iter()
            .map(|r| (r.value().to_string(), r.field_text("sentinel")))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("region".to_string(), None),
                ("3.5".to_string(), None),
                (String::new(), Some("…")),
                (String::new(), Some("..C")),
                ("n/a".to_string(), None),
            ]
        );
        assert!(set.iter().all(|r| r.has_field("sentinel")));
    }

    #[test]
    fn test_field_source() {
        let headers = vec![Cell::new(1, 1, "..C").unwrap()];
        let data = vec![Cell::new(2, 1, 7.0).unwrap()];

        let set = CellSet::new(data)
            .unwrap()
            .enhead(&headers, Direction::N, "flag")
            .unwrap()
            .isolate_sentinels(&ValueSource::field("flag"), ["..C"], "sentinel")
            .unwrap();

        let record = &set.records()[0];
        assert_eq!(record.value(), &CellValue::Number(7.0));
        assert_eq!(record.field_entry("flag"), Some(None));
        assert_eq!(record.field_text("sentinel"), Some("..C"));
    }

    #[test]
    fn test_non_text_sentinels() {
        let data = vec![Cell::new(1, 1, -999.0).unwrap(), Cell::new(1, 2, 4.0).unwrap()];
        let set = CellSet::new(data)
            .unwrap()
            .isolate_sentinels(&ValueSource::Cell, [-999.0], "missing")
            .unwrap();

        assert!(set.records()[0].value().is_blank());
        assert_eq!(set.records()[0].field("missing"), Some(&CellValue::Number(-999.0)));
        assert_eq!(set.records()[1].field("missing"), None);
    }

    #[test]
    fn test_errors() {
        let set = CellSet::new(cells()).unwrap();
        assert!(matches!(
            set.clone().isolate_sentinels(&ValueSource::field("nope"), ["…"], "s"),
            Err(Error::UnknownField(_))
        ));

        let once = set.isolate_sentinels(&ValueSource::Cell, ["…"], "s").unwrap();
        assert!(matches!(
            once.isolate_sentinels(&ValueSource::Cell, ["…"], "s"),
            Err(Error::DuplicateField(_))
        ));
    }
}
