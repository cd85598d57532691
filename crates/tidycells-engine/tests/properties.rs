//! Property tests for header resolution and reshaping

use std::collections::BTreeSet;

use proptest::prelude::*;
use tidycells_core::{Cell, CellValue};
use tidycells_engine::{gather, resolve, spatter, CellSet, Direction, HeaderIndex, WideRow, WideTable};

fn cells_at(positions: &BTreeSet<(u32, u32)>, label: &str) -> Vec<Cell> {
    positions
        .iter()
        .map(|&(r, c)| Cell::new(r, c, format!("{}{}_{}", label, r, c)).unwrap())
        .collect()
}

fn positions() -> impl Strategy<Value = BTreeSet<(u32, u32)>> {
    proptest::collection::btree_set((1u32..9, 1u32..9), 0..16)
}

fn direction() -> impl Strategy<Value = Direction> {
    (0usize..Direction::ALL.len()).prop_map(|i| Direction::ALL[i])
}

proptest! {
    #[test]
    fn test_index_agrees_with_scan(
        headers in positions(),
        data in positions(),
        direction in direction(),
    ) {
        let headers = cells_at(&headers, "h");
        let index = HeaderIndex::new(&headers, direction);

        for cell in cells_at(&data, "d") {
            let scanned = resolve(&cell, &headers, direction).map(Cell::position);
            let indexed = index.lookup(&cell).map(Cell::position);
            prop_assert_eq!(scanned, indexed, "{} at {}", direction, cell.position());
        }
    }

    #[test]
    fn test_west_resolves_nearest_on_same_row(
        headers in positions(),
        row in 1u32..9,
        col in 1u32..9,
    ) {
        let headers = cells_at(&headers, "h");
        let data = Cell::new(row, col, 1.0).unwrap();

        let expected = headers
            .iter()
            .filter(|h| h.row() == row && h.col() < col)
            .map(Cell::col)
            .max();
        let resolved = resolve(&data, &headers, Direction::W).map(Cell::col);

        prop_assert_eq!(resolved, expected);
        if let Some(h) = resolve(&data, &headers, Direction::W) {
            prop_assert_eq!(h.row(), row);
        }
    }

    #[test]
    fn test_independent_enheads_commute(
        first in positions(),
        second in positions(),
        data in positions(),
        d1 in direction(),
        d2 in direction(),
    ) {
        let first = cells_at(&first, "a");
        let second = cells_at(&second, "b");
        let data = cells_at(&data, "d");

        let ab = CellSet::new(data.clone()).unwrap()
            .enhead(&first, d1, "one").unwrap()
            .enhead(&second, d2, "two").unwrap();
        let ba = CellSet::new(data).unwrap()
            .enhead(&second, d2, "two").unwrap()
            .enhead(&first, d1, "one").unwrap();

        for (x, y) in ab.iter().zip(ba.iter()) {
            prop_assert_eq!(x.position(), y.position());
            prop_assert_eq!(x.field("one"), y.field("one"));
            prop_assert_eq!(x.field("two"), y.field("two"));
        }
    }

    #[test]
    fn test_gather_spatter_round_trip(
        values in proptest::collection::vec(proptest::collection::vec(-1000i32..1000, 3), 1..6),
    ) {
        let mut table = WideTable::new(
            vec!["id".to_string()],
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        );
        for (i, row) in values.iter().enumerate() {
            table.push_row(WideRow {
                row: i as u32 + 2,
                ids: vec![Some(CellValue::text(format!("r{}", i)))],
                values: row.iter().map(|&v| Some(CellValue::from(v))).collect(),
            }).unwrap();
        }

        let long = gather(&table, "variable").unwrap();
        prop_assert_eq!(long.len(), values.len() * 3);
        prop_assert_eq!(spatter(&long, "variable").unwrap(), table);
    }
}
