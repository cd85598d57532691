//! Cell position type

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell position on a sheet
///
/// Both `row` and `col` are 1-indexed, matching the way spreadsheet
/// importers report coordinates. Positions order by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Row index (1-based)
    pub row: u32,
    /// Column index (1-based, A=1, B=2, ...)
    pub col: u32,
}

impl Position {
    /// Create a position, rejecting zero indices
    pub fn new(row: u32, col: u32) -> Result<Self> {
        if row == 0 || col == 0 {
            return Err(Error::InvalidPosition { row, col });
        }
        Ok(Self { row, col })
    }

    /// Parse a position from A1-style notation (`$` markers are ignored)
    ///
    /// # Examples
    /// ```
    /// use tidycells_core::Position;
    ///
    /// let pos = Position::parse("C12").unwrap();
    /// assert_eq!(pos.row, 12);
    /// assert_eq!(pos.col, 3);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s: String = s.trim().chars().filter(|c| *c != '$').collect();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(|| Error::InvalidAddress(format!("no row number in '{}'", s)))?;
        if split == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[..split])?;
        let row: u32 = s[split..]
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        Self::new(row, col)
    }

    /// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA)
    pub fn column_to_letters(col: u32) -> String {
        let mut result = String::new();
        let mut n = col;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27)
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(c.to_ascii_uppercase() as u32 - 'A' as u32 + 1))
                .ok_or_else(|| Error::InvalidAddress(format!("column '{}' too large", letters)))?;
        }

        Ok(col)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(Position::column_to_letters(1), "A");
        assert_eq!(Position::column_to_letters(26), "Z");
        assert_eq!(Position::column_to_letters(27), "AA");
        assert_eq!(Position::column_to_letters(703), "AAA");

        assert_eq!(Position::letters_to_column("A").unwrap(), 1);
        assert_eq!(Position::letters_to_column("ab").unwrap(), 28);
        assert_eq!(Position::letters_to_column("XFD").unwrap(), 16384);
    }

    #[test]
    fn test_parse() {
        let pos = Position::parse("B3").unwrap();
        assert_eq!(pos, Position { row: 3, col: 2 });

        let pos = Position::parse("$AA$10").unwrap();
        assert_eq!(pos, Position { row: 10, col: 27 });

        assert!(Position::parse("").is_err());
        assert!(Position::parse("A").is_err());
        assert!(Position::parse("12").is_err());
        assert!(Position::parse("A0").is_err());
    }

    #[test]
    fn test_zero_rejected() {
        assert!(matches!(
            Position::new(0, 1),
            Err(Error::InvalidPosition { row: 0, col: 1 })
        ));
        assert!(Position::new(1, 0).is_err());
    }

    #[test]
    fn test_ordering_is_row_major() {
        let a = Position::new(1, 5).unwrap();
        let b = Position::new(2, 1).unwrap();
        assert!(a < b);
        assert_eq!(a.to_string(), "E1");
    }
}
