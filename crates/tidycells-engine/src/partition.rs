//! Splitting a sheet into several tables
//!
//! Sheets frequently hold more than one table, laid out in a grid. Given one
//! caller-chosen corner cell per table, every cell is assigned to the block
//! whose corner is the nearest one above and to the left of it.

use std::collections::BTreeMap;

use tidycells_core::{Cell, Position};

/// The cells belonging to one corner
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// The corner cell, if one lies exactly at the block origin
    pub corner: Option<Cell>,
    /// Top-left of the block: the row cut and column cut it starts at
    pub origin: Position,
    /// Member cells, in input order
    pub cells: Vec<Cell>,
}

/// Split `cells` into blocks by the rows and columns of `corners`
///
/// The distinct corner rows and columns act as cut lines. A cell belongs to
/// the block starting at the last row cut at or above it and the last column
/// cut at or left of it. Cells above the first row cut or left of the first
/// column cut belong to no block and are dropped. Blocks are returned in
/// (row cut, column cut) order; blocks with no cells are omitted.
///
/// ```
/// use tidycells_core::Cell;
/// use tidycells_engine::partition;
///
/// let cells = vec![
///     Cell::new(1, 1, "t1").unwrap(),
///     Cell::new(2, 1, 1.0).unwrap(),
///     Cell::new(1, 4, "t2").unwrap(),
///     Cell::new(2, 4, 2.0).unwrap(),
/// ];
/// let corners = vec![cells[0].clone(), cells[2].clone()];
///
/// let blocks = partition(&cells, &corners);
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1].cells.len(), 2);
/// ```
pub fn partition(cells: &[Cell], corners: &[Cell]) -> Vec<Partition> {
    let mut row_cuts: Vec<u32> = corners.iter().map(Cell::row).collect();
    row_cuts.sort_unstable();
    row_cuts.dedup();
    let mut col_cuts: Vec<u32> = corners.iter().map(Cell::col).collect();
    col_cuts.sort_unstable();
    col_cuts.dedup();

    let mut blocks: BTreeMap<Position, Vec<Cell>> = BTreeMap::new();
    let mut dropped = 0usize;

    for cell in cells {
        match (cut_at(&row_cuts, cell.row()), cut_at(&col_cuts, cell.col())) {
            (Some(row), Some(col)) => blocks
                .entry(Position { row, col })
                .or_default()
                .push(cell.clone()),
            _ => dropped += 1,
        }
    }

    log::debug!(
        "partition: {} cells into {} blocks, {} outside every block",
        cells.len(),
        blocks.len(),
        dropped
    );

    blocks
        .into_iter()
        .map(|(origin, cells)| Partition {
            corner: corners.iter().find(|c| c.position() == origin).cloned(),
            origin,
            cells,
        })
        .collect()
}

/// Largest cut at or before `line`
fn cut_at(cuts: &[u32], line: u32) -> Option<u32> {
    match cuts.binary_search(&line) {
        Ok(i) => Some(cuts[i]),
        Err(0) => None,
        Err(i) => Some(cuts[i - 1]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: u32, cols: u32) -> Vec<Cell> {
        (1..=rows)
            .flat_map(|r| (1..=cols).map(move |c| Cell::new(r, c, (r * 10 + c) as f64).unwrap()))
            .collect()
    }

    #[test]
    fn test_two_by_two_blocks() {
        let cells = grid(6, 6);
        let corners = vec![
            Cell::blank(2, 2).unwrap(),
            Cell::blank(2, 5).unwrap(),
            Cell::blank(4, 2).unwrap(),
            Cell::blank(4, 5).unwrap(),
        ];

        let blocks = partition(&cells, &corners);

        let origins: Vec<String> = blocks.iter().map(|b| b.origin.to_string()).collect();
        assert_eq!(origins, vec!["B2", "E2", "B4", "E4"]);
        // rows 2-3 x cols 2-4
        assert_eq!(blocks[0].cells.len(), 6);
        // rows 4-6 x cols 5-6
        assert_eq!(blocks[3].cells.len(), 6);
        assert!(blocks.iter().all(|b| b.corner.is_some()));

        // row 1 and column 1 belong nowhere
        let kept: usize = blocks.iter().map(|b| b.cells.len()).sum();
        assert_eq!(kept, 25);
    }

    #[test]
    fn test_origin_without_corner() {
        // Staggered corners produce a block at (3, 1) with no corner of its own
        let cells = grid(4, 3);
        let corners = vec![Cell::blank(1, 1).unwrap(), Cell::blank(3, 3).unwrap()];

        let blocks = partition(&cells, &corners);
        let lower_left = blocks
            .iter()
            .find(|b| b.origin == Position { row: 3, col: 1 })
            .unwrap();
        assert!(lower_left.corner.is_none());
        assert_eq!(lower_left.cells.len(), 4);
    }

    #[test]
    fn test_no_corners() {
        assert!(partition(&grid(2, 2), &[]).is_empty());
    }
}
