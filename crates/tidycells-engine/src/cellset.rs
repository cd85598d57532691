//! Header association over a working cell collection
//!
//! A [`CellSet`] is the state threaded through an unpivoting pipeline. Each
//! stage consumes the set and returns a new one: `enhead` joins the data
//! against a caller-supplied header collection, `behead` peels the outermost
//! header level off the set itself.
//!
//! ```
//! use tidycells_core::Cell;
//! use tidycells_engine::{CellSet, Direction};
//!
//! let cells = vec![
//!     Cell::new(1, 2, "Female").unwrap(),
//!     Cell::new(2, 2, "matilda").unwrap(),
//!     Cell::new(2, 3, "jason").unwrap(),
//!     Cell::new(3, 2, 2.0).unwrap(),
//!     Cell::new(3, 3, 8.0).unwrap(),
//! ];
//!
//! let tidy = CellSet::new(cells)
//!     .unwrap()
//!     .behead(Direction::NNW, "sex")
//!     .unwrap()
//!     .behead(Direction::N, "name")
//!     .unwrap();
//!
//! assert_eq!(tidy.len(), 2);
//! assert!(tidy.iter().all(|r| r.field_text("sex") == Some("Female")));
//! ```

use tidycells_core::{check_unique_positions, Cell};

use crate::direction::{Direction, Family};
use crate::error::{Error, Result};
use crate::options::{BeheadOptions, EnheadOptions};
use crate::record::Record;
use crate::resolver::HeaderIndex;
use crate::warning::Warning;

/// An ordered collection of records plus the warnings gathered so far
#[derive(Debug, Clone, Default)]
pub struct CellSet {
    records: Vec<Record>,
    warnings: Vec<Warning>,
}

impl CellSet {
    /// Start a pipeline from plain cells
    ///
    /// Fails if two cells share a position.
    pub fn new(cells: Vec<Cell>) -> Result<Self> {
        check_unique_positions(&cells)?;
        Ok(Self {
            records: cells.into_iter().map(Record::new).collect(),
            warnings: Vec::new(),
        })
    }

    /// Resume a pipeline from records
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        check_unique_positions(records.iter().map(Record::cell))?;
        Ok(Self {
            records,
            warnings: Vec::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The underlying cells, in collection order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.records.iter().map(Record::cell)
    }

    /// Warnings collected by strict stages
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn into_parts(self) -> (Vec<Record>, Vec<Warning>) {
        (self.records, self.warnings)
    }

    /// Attach `field` to every record from the header governing it
    ///
    /// Equivalent to [`enhead_with`](Self::enhead_with) with default options.
    pub fn enhead(self, headers: &[Cell], direction: Direction, field: &str) -> Result<Self> {
        self.enhead_with(headers, direction, field, &EnheadOptions::default())
    }

    /// Attach `field` to every record from the header governing it
    ///
    /// Each record is resolved against `headers` independently and only by
    /// its own position, so chained calls with independent header
    /// collections give the same fields in any order. Records with no
    /// governing header get a missing value.
    pub fn enhead_with(
        mut self,
        headers: &[Cell],
        direction: Direction,
        field: &str,
        options: &EnheadOptions,
    ) -> Result<Self> {
        self.ensure_new_field(field)?;

        if direction.family() == Family::Proximity {
            log::warn!(
                "attaching '{}' by proximity ({}); headers are matched by distance only",
                field,
                direction
            );
            if options.strict {
                self.warnings.push(Warning::ProximityDirection {
                    field: field.to_string(),
                    direction,
                });
            }
        }

        let index = HeaderIndex::new(headers, direction);
        let mut unresolved = 0usize;

        for record in &mut self.records {
            match index.lookup(record.cell()) {
                Some(header) => record.push_field(field, Some(header.value().clone())),
                None => {
                    unresolved += 1;
                    record.push_field(field, None);
                    if options.strict {
                        self.warnings.push(Warning::UnresolvedHeader {
                            position: record.position(),
                            field: field.to_string(),
                            direction,
                        });
                    }
                }
            }
        }

        log::debug!(
            "enhead '{}' ({}): {} data cells, {} headers, {} unresolved",
            field,
            direction,
            self.records.len(),
            headers.len(),
            unresolved
        );

        Ok(self)
    }

    /// Peel the outermost header level off the set
    ///
    /// Equivalent to [`behead_with`](Self::behead_with) with default options.
    pub fn behead(self, direction: Direction, field: &str) -> Result<Self> {
        self.behead_with(direction, field, &BeheadOptions::default())
    }

    /// Peel the outermost header level off the set
    ///
    /// The header level is the outermost row (for N/S-type directions) or
    /// column (for E/W-type directions) on the side the direction points to:
    /// the top row for `N`, `NNW`, `NNE` and `ABOVE`, the leftmost column
    /// for `W`, `WNW`, `WSW` and `LEFT`, and so on. Cells of that level are
    /// removed from the set and every remaining record gets `field` from the
    /// header that governs it.
    pub fn behead_with(self, direction: Direction, field: &str, options: &BeheadOptions) -> Result<Self> {
        self.behead_impl(direction, field, |_| true, options)
    }

    /// Peel the outermost level of cells matching `predicate`
    ///
    /// Only cells satisfying `predicate` are considered headers; the level
    /// is chosen among them, and non-matching cells on that level stay in the
    /// set as data. Useful when headers are marked by formatting, e.g. bold or
    /// indented row labels sharing a column with data.
    pub fn behead_if<P>(self, direction: Direction, field: &str, predicate: P) -> Result<Self>
    where
        P: Fn(&Cell) -> bool,
    {
        self.behead_impl(direction, field, predicate, &BeheadOptions::default())
    }

    /// [`behead_if`](Self::behead_if) with explicit options
    pub fn behead_if_with<P>(
        self,
        direction: Direction,
        field: &str,
        predicate: P,
        options: &BeheadOptions,
    ) -> Result<Self>
    where
        P: Fn(&Cell) -> bool,
    {
        self.behead_impl(direction, field, predicate, options)
    }

    fn behead_impl<P>(
        self,
        direction: Direction,
        field: &str,
        predicate: P,
        options: &BeheadOptions,
    ) -> Result<Self>
    where
        P: Fn(&Cell) -> bool,
    {
        self.ensure_new_field(field)?;

        let side = direction.side();
        let level = self
            .records
            .iter()
            .map(Record::cell)
            .filter(|&c| predicate(c))
            .map(|c| side.level_of(c.row(), c.col()))
            .reduce(|best, l| if side.is_outer(l, best) { l } else { best });

        let (header_records, data): (Vec<Record>, Vec<Record>) =
            self.records.into_iter().partition(|r| {
                let c = r.cell();
                level == Some(side.level_of(c.row(), c.col())) && predicate(c)
            });

        let level_size = header_records.len();
        let headers: Vec<Cell> = header_records
            .into_iter()
            .map(Record::into_cell)
            .filter(|c| !(options.drop_blank && c.is_blank()))
            .collect();

        log::debug!(
            "behead '{}' ({}): level {:?} has {} cells, {} used as headers",
            field,
            direction,
            level,
            level_size,
            headers.len()
        );

        let remaining = CellSet {
            records: data,
            warnings: self.warnings,
        };
        remaining.enhead_with(
            &headers,
            direction,
            field,
            &EnheadOptions {
                strict: options.strict,
            },
        )
    }

    /// Keep only the records matching `predicate`
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&Record) -> bool,
    {
        Self {
            records: self.records.into_iter().filter(|r| predicate(r)).collect(),
            warnings: self.warnings,
        }
    }

    /// Remove a field from every record
    pub fn drop_field(mut self, field: &str) -> Result<Self> {
        let mut found = false;
        for record in &mut self.records {
            found |= record.remove_field(field);
        }
        if !found && !self.records.is_empty() {
            return Err(Error::UnknownField(field.to_string()));
        }
        Ok(self)
    }

    /// Rename a field on every record
    pub fn rename_field(mut self, from: &str, to: &str) -> Result<Self> {
        if from == to {
            return Ok(self);
        }
        self.ensure_new_field(to)?;

        let mut found = false;
        for record in &mut self.records {
            found |= record.rename_field(from, to);
        }
        if !found && !self.records.is_empty() {
            return Err(Error::UnknownField(from.to_string()));
        }
        Ok(self)
    }

    pub(crate) fn ensure_new_field(&self, field: &str) -> Result<()> {
        if self.records.iter().any(|r| r.has_field(field)) {
            return Err(Error::DuplicateField(field.to_string()));
        }
        Ok(())
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }
}

impl IntoIterator for CellSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
