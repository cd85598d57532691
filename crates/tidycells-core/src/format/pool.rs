//! Format pool for deduplication

use super::{Format, FormatId};
use crate::cell::Cell;
use crate::error::{Error, Result};
use ahash::AHashMap;

/// Arena of unique formats
///
/// Sheets typically have many cells sharing the same format. The pool stores
/// each unique format once and cells reference it by [`FormatId`]. A pool
/// from [`FormatPool::new`] keeps the default format at index 0; one built
/// with [`FormatPool::from_table`] keeps the importer's order instead.
/// Either way, unknown ids fall back to [`Format::default`].
///
/// The pool is filled while loading a sheet and only read afterwards; engine
/// stages take `&FormatPool`, so one pool can be shared across threads.
#[derive(Debug, Clone)]
pub struct FormatPool {
    formats: Vec<Format>,
    index_map: AHashMap<Format, u32>,
    fallback: Format,
}

impl FormatPool {
    /// Create a new format pool with the default format at index 0
    pub fn new() -> Self {
        let mut pool = Self {
            formats: Vec::with_capacity(64),
            index_map: AHashMap::with_capacity(64),
            fallback: Format::default(),
        };
        pool.insert(Format::default());
        pool
    }

    /// Build a pool whose ids match the importer's format table order
    ///
    /// Importers report cells with ids into their own table, so entries are
    /// kept at their original index even when two are identical. The first
    /// entry becomes index 0, whatever it is.
    pub fn from_table<I: IntoIterator<Item = Format>>(table: I) -> Self {
        let mut formats: Vec<Format> = table.into_iter().collect();
        if formats.is_empty() {
            formats.push(Format::default());
        }

        let mut index_map = AHashMap::with_capacity(formats.len());
        for (idx, format) in formats.iter().enumerate() {
            index_map.entry(format.clone()).or_insert(idx as u32);
        }

        Self {
            formats,
            index_map,
            fallback: Format::default(),
        }
    }

    /// Get or create a format, returning its id
    ///
    /// If an identical format already exists, returns its id.
    pub fn insert(&mut self, format: Format) -> FormatId {
        if let Some(&idx) = self.index_map.get(&format) {
            return FormatId(idx);
        }

        let idx = self.formats.len() as u32;
        self.index_map.insert(format.clone(), idx);
        self.formats.push(format);
        FormatId(idx)
    }

    /// Get a format by id
    pub fn get(&self, id: FormatId) -> Option<&Format> {
        self.formats.get(id.0 as usize)
    }

    /// Get a format by id, failing on unknown ids
    pub fn try_get(&self, id: FormatId) -> Result<&Format> {
        self.get(id).ok_or(Error::InvalidFormatId(id.0))
    }

    /// Format of a cell; unknown ids fall back to the default format
    pub fn format_of(&self, cell: &Cell) -> &Format {
        self.get(cell.format_id())
            .unwrap_or_else(|| self.default_format())
    }

    /// Get the default format, used for cells with unknown ids
    pub fn default_format(&self) -> &Format {
        &self.fallback
    }

    /// Get the number of formats
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Check if the pool only holds the default format
    pub fn is_empty(&self) -> bool {
        self.formats.len() <= 1
    }

    /// Iterate over all formats with their ids
    pub fn iter(&self) -> impl Iterator<Item = (FormatId, &Format)> {
        self.formats
            .iter()
            .enumerate()
            .map(|(i, f)| (FormatId(i as u32), f))
    }
}

impl Default for FormatPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Color;

    #[test]
    fn test_default_format() {
        let pool = FormatPool::new();
        assert_eq!(pool.len(), 1);
        assert!(pool.is_empty());
        assert_eq!(pool.get(FormatId::DEFAULT), Some(&Format::default()));
    }

    #[test]
    fn test_deduplication() {
        let mut pool = FormatPool::new();

        let id1 = pool.insert(Format::new().bold(true));
        let id2 = pool.insert(Format::new().bold(true));
        let id3 = pool.insert(Format::new().italic(true));

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_from_table_keeps_importer_ids() {
        let table = vec![
            Format::default(),
            Format::new().fill_color(Color::YELLOW),
            Format::default(),
            Format::new().indent(2),
        ];
        let pool = FormatPool::from_table(table);

        assert_eq!(pool.len(), 4);
        assert_eq!(pool.get(FormatId(3)).map(|f| f.indent), Some(2));
        assert_eq!(pool.get(FormatId(2)), Some(&Format::default()));
    }

    #[test]
    fn test_from_table_fallback_is_default_format() {
        let pool = FormatPool::from_table(vec![Format::new().bold(true), Format::default()]);

        assert!(pool.get(FormatId(0)).map_or(false, |f| f.bold));
        assert_eq!(pool.default_format(), &Format::default());

        let dangling = Cell::new(1, 1, "x").unwrap().with_format(FormatId(7));
        assert_eq!(pool.format_of(&dangling), &Format::default());
    }

    #[test]
    fn test_format_of_cell() {
        let mut pool = FormatPool::new();
        let bold = pool.insert(Format::new().bold(true));

        let cell = Cell::new(1, 1, "Total").unwrap().with_format(bold);
        assert!(pool.format_of(&cell).bold);

        let dangling = Cell::new(1, 2, "x").unwrap().with_format(FormatId(99));
        assert!(!pool.format_of(&dangling).bold);
        assert!(matches!(
            pool.try_get(FormatId(99)),
            Err(Error::InvalidFormatId(99))
        ));
    }
}
