//! Cell format types
//!
//! Formats are stored once in a [`FormatPool`] and cells refer to them by
//! [`FormatId`]. This module contains:
//! - [`Format`] - The queryable attributes used to classify cells
//! - [`Borders`] - Per-side border presence
//! - [`Color`] - Color representation

mod border;
mod color;
mod pool;

use std::collections::BTreeMap;
use std::fmt;

pub use border::{BorderLine, Borders};
pub use color::Color;
pub use pool::FormatPool;

/// Opaque reference into a [`FormatPool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatId(pub u32);

impl FormatId {
    /// Id of the default format in a pool from [`FormatPool::new`]
    pub const DEFAULT: FormatId = FormatId(0);
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Formatting attributes of a cell
///
/// Rarely used attributes that have no named field live in `extra`, keyed by
/// attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Format {
    /// Background fill color
    pub fill_color: Option<Color>,
    /// Font color
    pub font_color: Option<Color>,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Border presence per side
    pub borders: Borders,
    /// Indent level
    pub indent: u8,
    /// Extension attributes
    pub extra: BTreeMap<String, String>,
}

impl Format {
    /// Create a new default format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set fill color
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Set indent level
    pub fn indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Set borders
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Set an extension attribute
    pub fn with_extra<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Look up an extension attribute
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}
