//! Compass directions relating header cells to the data they govern
//!
//! A direction names where the header lies as seen from a data cell. `N`
//! means "the header is straight up the same column", `NNW` means "the
//! header is in a row above, at or to the left of this column", and so on.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Spatial relationship between a data cell and its governing header
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same column, above
    N,
    /// Same column, below
    S,
    /// Same row, to the right
    E,
    /// Same row, to the left
    W,
    /// Row above, column at or left of the data
    NNW,
    /// Row above, column at or right of the data
    NNE,
    /// Row below, column at or left of the data
    SSW,
    /// Row below, column at or right of the data
    SSE,
    /// Column to the left, row at or above the data
    WNW,
    /// Column to the left, row at or below the data
    WSW,
    /// Column to the right, row at or above the data
    ENE,
    /// Column to the right, row at or below the data
    ESE,
    /// Nearest header anywhere above
    Above,
    /// Nearest header anywhere below
    Below,
    /// Nearest header anywhere to the left
    Left,
    /// Nearest header anywhere to the right
    Right,
}

/// How strictly a direction constrains header placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Header on the same row or column
    Cardinal,
    /// Header on an offset row or column, nearest on both axes
    Compound,
    /// Header anywhere in a half plane, nearest by distance
    ///
    /// These ignore table regions entirely. They only give sensible results
    /// when every header is closer to the cells it governs than any other
    /// header is; prefer a compound direction, or [`justify`](crate::justify)
    /// the headers first, whenever that does not hold.
    Proximity,
}

/// Which side of the data a header level lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// The row (top/bottom) or column (left/right) a position occupies on
    /// this side's axis
    pub fn level_of(&self, row: u32, col: u32) -> u32 {
        match self {
            Side::Top | Side::Bottom => row,
            Side::Left | Side::Right => col,
        }
    }

    /// Whether `candidate` lies further out on this side than `current`
    pub fn is_outer(&self, candidate: u32, current: u32) -> bool {
        match self {
            Side::Top | Side::Left => candidate < current,
            Side::Bottom | Side::Right => candidate > current,
        }
    }
}

impl Direction {
    /// Every direction, in declaration order
    pub const ALL: [Direction; 16] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NNW,
        Direction::NNE,
        Direction::SSW,
        Direction::SSE,
        Direction::WNW,
        Direction::WSW,
        Direction::ENE,
        Direction::ESE,
        Direction::Above,
        Direction::Below,
        Direction::Left,
        Direction::Right,
    ];

    pub fn family(&self) -> Family {
        use Direction as D;
        match self {
            D::N | D::S | D::E | D::W => Family::Cardinal,
            D::NNW | D::NNE | D::SSW | D::SSE | D::WNW | D::WSW | D::ENE | D::ESE => {
                Family::Compound
            }
            D::Above | D::Below | D::Left | D::Right => Family::Proximity,
        }
    }

    /// Side of the data cells on which the headers lie
    pub fn side(&self) -> Side {
        use Direction as D;
        match self {
            D::N | D::NNW | D::NNE | D::Above => Side::Top,
            D::S | D::SSW | D::SSE | D::Below => Side::Bottom,
            D::W | D::WNW | D::WSW | D::Left => Side::Left,
            D::E | D::ENE | D::ESE | D::Right => Side::Right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        use Direction as D;
        match self {
            D::N => "N",
            D::S => "S",
            D::E => "E",
            D::W => "W",
            D::NNW => "NNW",
            D::NNE => "NNE",
            D::SSW => "SSW",
            D::SSE => "SSE",
            D::WNW => "WNW",
            D::WSW => "WSW",
            D::ENE => "ENE",
            D::ESE => "ESE",
            D::Above => "ABOVE",
            D::Below => "BELOW",
            D::Left => "LEFT",
            D::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Parse a direction name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Error> {
        let upper = s.trim().to_ascii_uppercase();
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == upper)
            .ok_or_else(|| Error::UnknownDirection(s.to_string()))
    }
}
