//! Directional header resolution
//!
//! [`resolve`] is the reference definition of which header governs a data
//! cell. [`HeaderIndex`] answers the same question for many data cells by
//! pre-sorting the headers along the constrained axis, so a lookup is a
//! binary search instead of a scan over every header.
//!
//! Every direction is strict: a header never governs a cell on its own row
//! (for N/S-type directions) or column (for E/W-type directions) beyond what
//! the direction allows, so a header sharing the data cell's position is
//! never a candidate.
//!
//! Ties are broken deterministically:
//! - cardinal and compound directions pick the nearest line first, then the
//!   nearest offset on the other axis (largest column not exceeding the data
//!   column for `NNW`, and so on)
//! - proximity directions pick the smallest squared Euclidean distance, then
//!   the smaller row, then the smaller column
//! - a header collection holding two cells at one position yields the one
//!   that comes first in the collection

use std::collections::BTreeMap;
use std::ops::Bound;

use ahash::AHashMap;
use tidycells_core::{Cell, Position};

use crate::direction::{Direction, Family};

/// Sort key of a candidate header; smaller is better
type Rank = (u64, u64, u32, u32);

/// Rank `header` as a candidate for `data`, or `None` if the direction rules
/// it out
fn rank(direction: Direction, data: Position, header: Position) -> Option<Rank> {
    use Direction as D;

    let (dr, dc) = (data.row as u64, data.col as u64);
    let (hr, hc) = (header.row as u64, header.col as u64);
    let key = |primary: u64, secondary: u64| Some((primary, secondary, header.row, header.col));

    match direction {
        D::N if hc == dc && hr < dr => key(dr - hr, 0),
        D::S if hc == dc && hr > dr => key(hr - dr, 0),
        D::W if hr == dr && hc < dc => key(dc - hc, 0),
        D::E if hr == dr && hc > dc => key(hc - dc, 0),

        D::NNW if hr < dr && hc <= dc => key(dr - hr, dc - hc),
        D::NNE if hr < dr && hc >= dc => key(dr - hr, hc - dc),
        D::SSW if hr > dr && hc <= dc => key(hr - dr, dc - hc),
        D::SSE if hr > dr && hc >= dc => key(hr - dr, hc - dc),
        D::WNW if hc < dc && hr <= dr => key(dc - hc, dr - hr),
        D::WSW if hc < dc && hr >= dr => key(dc - hc, hr - dr),
        D::ENE if hc > dc && hr <= dr => key(hc - dc, dr - hr),
        D::ESE if hc > dc && hr >= dr => key(hc - dc, hr - dr),

        D::Above if hr < dr => key(distance(data, header), 0),
        D::Below if hr > dr => key(distance(data, header), 0),
        D::Left if hc < dc => key(distance(data, header), 0),
        D::Right if hc > dc => key(distance(data, header), 0),

        _ => None,
    }
}

/// Squared Euclidean distance
fn distance(a: Position, b: Position) -> u64 {
    let dr = (a.row as i64 - b.row as i64).unsigned_abs();
    let dc = (a.col as i64 - b.col as i64).unsigned_abs();
    dr * dr + dc * dc
}

/// Find the header governing `data` in `direction`, if any
///
/// Scans every header. Use [`HeaderIndex`] when resolving many data cells
/// against the same headers.
///
/// # Examples
/// ```
/// use tidycells_core::Cell;
/// use tidycells_engine::{resolve, Direction};
///
/// let headers = vec![Cell::new(3, 1, "history").unwrap()];
/// let data = Cell::new(3, 4, 7.0).unwrap();
///
/// let header = resolve(&data, &headers, Direction::W).unwrap();
/// assert_eq!(header.value().as_text(), Some("history"));
/// assert!(resolve(&data, &headers, Direction::N).is_none());
/// ```
pub fn resolve<'h>(data: &Cell, headers: &'h [Cell], direction: Direction) -> Option<&'h Cell> {
    let at = data.position();
    headers
        .iter()
        .filter_map(|h| rank(direction, at, h.position()).map(|r| (r, h)))
        .min_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, h)| h)
}

/// Sorted entries: (axis coordinate, index into the header slice)
type Line = Vec<(u32, usize)>;

#[derive(Debug)]
enum Layout {
    /// Cardinal: headers grouped by the shared row or column
    Lines(AHashMap<u32, Line>),
    /// Compound: headers grouped by row (N/S-type) or column (E/W-type)
    Bands(BTreeMap<u32, Line>),
    /// Proximity: no useful ordering, scan everything
    Scan,
}

/// Immutable lookup structure over one header collection and direction
///
/// Built once per association step and only read afterwards, so it can be
/// shared between threads resolving different data cells.
#[derive(Debug)]
pub struct HeaderIndex<'h> {
    headers: &'h [Cell],
    direction: Direction,
    layout: Layout,
}

impl<'h> HeaderIndex<'h> {
    /// Index `headers` for lookups in `direction`
    pub fn new(headers: &'h [Cell], direction: Direction) -> Self {
        use Direction as D;

        let layout = match direction.family() {
            Family::Cardinal => {
                let mut lines: AHashMap<u32, Line> = AHashMap::new();
                for (idx, h) in headers.iter().enumerate() {
                    let (line, along) = match direction {
                        D::N | D::S => (h.col(), h.row()),
                        _ => (h.row(), h.col()),
                    };
                    lines.entry(line).or_default().push((along, idx));
                }
                for line in lines.values_mut() {
                    line.sort_unstable();
                }
                Layout::Lines(lines)
            }
            Family::Compound => {
                let mut bands: BTreeMap<u32, Line> = BTreeMap::new();
                for (idx, h) in headers.iter().enumerate() {
                    let (band, along) = match direction {
                        D::NNW | D::NNE | D::SSW | D::SSE => (h.row(), h.col()),
                        _ => (h.col(), h.row()),
                    };
                    bands.entry(band).or_default().push((along, idx));
                }
                for band in bands.values_mut() {
                    band.sort_unstable();
                }
                Layout::Bands(bands)
            }
            Family::Proximity => Layout::Scan,
        };

        Self {
            headers,
            direction,
            layout,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn headers(&self) -> &'h [Cell] {
        self.headers
    }

    /// Find the header governing `data`; agrees with [`resolve`]
    pub fn lookup(&self, data: &Cell) -> Option<&'h Cell> {
        let idx = match &self.layout {
            Layout::Lines(lines) => self.lookup_line(lines, data.position()),
            Layout::Bands(bands) => self.lookup_band(bands, data.position()),
            Layout::Scan => return resolve(data, self.headers, self.direction),
        };
        idx.map(|i| &self.headers[i])
    }

    fn lookup_line(&self, lines: &AHashMap<u32, Line>, at: Position) -> Option<usize> {
        use Direction as D;

        match self.direction {
            D::N => last_below(lines.get(&at.col)?, at.row),
            D::S => first_above(lines.get(&at.col)?, at.row),
            D::W => last_below(lines.get(&at.row)?, at.col),
            D::E => first_above(lines.get(&at.row)?, at.col),
            _ => None,
        }
    }

    fn lookup_band(&self, bands: &BTreeMap<u32, Line>, at: Position) -> Option<usize> {
        use Direction as D;

        let (band, along) = match self.direction {
            D::NNW | D::NNE | D::SSW | D::SSE => (at.row, at.col),
            _ => (at.col, at.row),
        };
        let before = bands.range(..band).rev();
        let after = bands.range((Bound::Excluded(band), Bound::Unbounded));

        match self.direction {
            D::NNW | D::WNW => before.filter_map(|(_, l)| last_at_most(l, along)).next(),
            D::NNE | D::WSW => before.filter_map(|(_, l)| first_at_least(l, along)).next(),
            D::SSW | D::ENE => after.filter_map(|(_, l)| last_at_most(l, along)).next(),
            D::SSE | D::ESE => after.filter_map(|(_, l)| first_at_least(l, along)).next(),
            _ => None,
        }
    }
}

/// Largest coordinate strictly below `bound`, earliest header on ties
fn last_below(line: &Line, bound: u32) -> Option<usize> {
    let p = line.partition_point(|&(v, _)| v < bound);
    let best = line.get(p.checked_sub(1)?)?.0;
    first_with(line, best)
}

/// Largest coordinate at most `bound`, earliest header on ties
fn last_at_most(line: &Line, bound: u32) -> Option<usize> {
    let p = line.partition_point(|&(v, _)| v <= bound);
    let best = line.get(p.checked_sub(1)?)?.0;
    first_with(line, best)
}

/// Smallest coordinate strictly above `bound`
fn first_above(line: &Line, bound: u32) -> Option<usize> {
    let p = line.partition_point(|&(v, _)| v <= bound);
    line.get(p).map(|&(_, idx)| idx)
}

/// Smallest coordinate at least `bound`
fn first_at_least(line: &Line, bound: u32) -> Option<usize> {
    let p = line.partition_point(|&(v, _)| v < bound);
    line.get(p).map(|&(_, idx)| idx)
}

fn first_with(line: &Line, value: u32) -> Option<usize> {
    let p = line.partition_point(|&(v, _)| v < value);
    line.get(p).map(|&(_, idx)| idx)
}
