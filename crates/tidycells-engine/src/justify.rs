//! Moving headers onto the corners of the cells they govern
//!
//! Headers are often centered over, or placed in the middle of, the block
//! they describe. Compound directions assume the header sits at a corner of
//! its block, so such headers are first moved onto caller-chosen corner
//! positions.

use ahash::AHashMap;
use tidycells_core::{check_unique_positions, Cell, Position};

use crate::error::{Error, Result};

/// How header cells are paired with corner cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Correspondence {
    /// Sort both collections by row then column and pair them in order
    #[default]
    Sorted,
    /// Pair each header with the corner on the same row (row headers)
    ByRow,
    /// Pair each header with the corner in the same column (column headers)
    ByCol,
}

/// Move every header to its corresponding corner position
///
/// The returned cells keep the header values and formats, in the order of
/// `headers`, at the positions of `corners`. The corner cells' own values are
/// ignored.
///
/// # Errors
///
/// - [`Error::CardinalityMismatch`] when the collections differ in size
/// - [`Error::AmbiguousCorrespondence`] when a header does not pair with
///   exactly one corner
///
/// # Examples
/// ```
/// use tidycells_core::Cell;
/// use tidycells_engine::{justify, Correspondence};
///
/// // "Female" is centered over columns 2-4
/// let headers = vec![Cell::new(1, 3, "Female").unwrap()];
/// let corners = vec![Cell::blank(1, 2).unwrap()];
///
/// let moved = justify(&headers, &corners, Correspondence::Sorted).unwrap();
/// assert_eq!((moved[0].row(), moved[0].col()), (1, 2));
/// assert_eq!(moved[0].value().as_text(), Some("Female"));
/// ```
pub fn justify(headers: &[Cell], corners: &[Cell], correspondence: Correspondence) -> Result<Vec<Cell>> {
    if headers.len() != corners.len() {
        return Err(Error::CardinalityMismatch {
            headers: headers.len(),
            corners: corners.len(),
        });
    }
    check_unique_positions(headers)?;
    check_unique_positions(corners)?;

    let targets = match correspondence {
        Correspondence::Sorted => sorted_targets(headers, corners),
        Correspondence::ByRow => line_targets(headers, corners, |p| p.row, "row")?,
        Correspondence::ByCol => line_targets(headers, corners, |p| p.col, "column")?,
    };

    log::debug!(
        "justify: moved {} headers ({:?})",
        headers.len(),
        correspondence
    );

    Ok(headers
        .iter()
        .zip(targets)
        .map(|(h, target)| h.with_position(target))
        .collect())
}

fn sorted_targets(headers: &[Cell], corners: &[Cell]) -> Vec<Position> {
    let mut header_order: Vec<usize> = (0..headers.len()).collect();
    header_order.sort_by_key(|&i| headers[i].position());

    let mut corner_positions: Vec<Position> = corners.iter().map(Cell::position).collect();
    corner_positions.sort();

    let mut targets = vec![Position { row: 1, col: 1 }; headers.len()];
    for (rank, &i) in header_order.iter().enumerate() {
        targets[i] = corner_positions[rank];
    }
    targets
}

fn line_targets<F>(headers: &[Cell], corners: &[Cell], line: F, axis: &str) -> Result<Vec<Position>>
where
    F: Fn(Position) -> u32,
{
    let mut by_line: AHashMap<u32, Position> = AHashMap::with_capacity(corners.len());
    for corner in corners {
        let at = corner.position();
        if let Some(other) = by_line.insert(line(at), at) {
            return Err(Error::AmbiguousCorrespondence {
                position: at,
                message: format!("corners {} and {} share a {}", other, at, axis),
            });
        }
    }

    let mut claimed: AHashMap<u32, Position> = AHashMap::with_capacity(headers.len());
    headers
        .iter()
        .map(|h| {
            let at = h.position();
            if let Some(other) = claimed.insert(line(at), at) {
                return Err(Error::AmbiguousCorrespondence {
                    position: at,
                    message: format!("headers {} and {} share a {}", other, at, axis),
                });
            }
            by_line
                .get(&line(at))
                .copied()
                .ok_or_else(|| Error::AmbiguousCorrespondence {
                    position: at,
                    message: format!("no corner in the same {}", axis),
                })
        })
        .collect()
}
