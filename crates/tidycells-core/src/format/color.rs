//! Color representation

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Color representation
///
/// Importers report colors either as explicit (A)RGB values or as references
/// into a theme or legacy palette. Theme and indexed colors are kept as
/// references; resolving them needs the workbook theme, which the engine
/// never sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Theme color with tint (percentage, -100 to 100)
    Theme { index: u8, tint: i8 },

    /// Indexed color (legacy palette)
    Indexed(u8),
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "FFFF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        let byte = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };

        match hex.len() {
            6 => Some(Color::Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            }),
            8 => Some(Color::Argb {
                a: byte(0)?,
                r: byte(2)?,
                g: byte(4)?,
                b: byte(6)?,
            }),
            _ => None,
        }
    }

    /// Convert to hex string (without # prefix); `None` for palette references
    pub fn to_hex(&self) -> Option<String> {
        match self {
            Color::Rgb { r, g, b } => Some(format!("{:02X}{:02X}{:02X}", r, g, b)),
            Color::Argb { a, r, g, b } => Some(format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b)),
            Color::Theme { .. } | Color::Indexed(_) => None,
        }
    }

    /// Opaque ARGB colors compare equal to their RGB counterpart
    pub fn same_as(&self, other: &Color) -> bool {
        self.normalized() == other.normalized()
    }

    fn normalized(&self) -> Color {
        match *self {
            Color::Argb { a: 0xFF, r, g, b } => Color::Rgb { r, g, b },
            other => other,
        }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s).ok_or_else(|| Error::other(format!("invalid color '{}'", s)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
            Color::Theme { index, tint } => write!(f, "theme({}, {}%)", index, tint),
            Color::Indexed(i) => write!(f, "indexed({})", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(
            Color::from_hex("80FFFFFF"),
            Some(Color::Argb {
                a: 128,
                r: 255,
                g: 255,
                b: 255
            })
        );
        assert_eq!(Color::from_hex("FFF"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::YELLOW.to_hex().as_deref(), Some("FFFF00"));
        assert_eq!(Color::Indexed(2).to_hex(), None);
    }

    #[test]
    fn test_opaque_argb_matches_rgb() {
        let argb: Color = "FFFF0000".parse().unwrap();
        assert!(argb.same_as(&Color::RED));
        assert!(!Color::from_hex("80FF0000").unwrap().same_as(&Color::RED));
    }
}
