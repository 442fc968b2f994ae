//! Tests for grid and page generation.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::collections::HashSet;

use gridmark::coordinate::parse_coordinate;
use gridmark::layout::GridLayout;
use gridmark::{Grid, GridConfig, GridmarkError};
use test_case::test_case;

fn config(columns: u32, rows: u32, per_page: u32, final_columns: u32) -> GridConfig {
    GridConfig {
        num_columns: columns,
        num_rows: rows,
        num_tables_per_page: per_page,
        num_final_columns: final_columns,
        ..GridConfig::default()
    }
}

#[test_case(14, 10, 3, 69 ; "host layout")]
#[test_case(5, 5, 2, 10 ; "exact multiple")]
#[test_case(4, 3, 2, 9 ; "partial last table")]
#[test_case(10, 1, 1, 3 ; "final columns below table width")]
#[test_case(1, 1, 4, 7 ; "single column tables")]
fn test_table_and_page_counts(columns: u32, rows: u32, per_page: u32, final_columns: u32) {
    let grid = Grid::new(config(columns, rows, per_page, final_columns)).unwrap();
    let rendered = grid.rendered();

    let expected_tables = final_columns.div_ceil(columns) as usize;
    assert_eq!(rendered.table_count(), expected_tables);
    assert_eq!(
        rendered.pages.len(),
        expected_tables.div_ceil(per_page as usize)
    );
    for page in &rendered.pages {
        assert!(!page.tables.is_empty());
        assert!(page.tables.len() <= per_page as usize);
    }
    // Only the last page may be partial.
    for page in &rendered.pages[..rendered.pages.len() - 1] {
        assert_eq!(page.tables.len(), per_page as usize);
    }
}

#[test_case(false, false ; "one based")]
#[test_case(true, false ; "zero based columns")]
#[test_case(false, true ; "zero based rows")]
#[test_case(true, true ; "zero based both")]
fn test_coordinates_unique_and_in_range(column_zero: bool, row_zero: bool) {
    let mut cfg = config(4, 3, 2, 10);
    cfg.column_starts_with_zero = column_zero;
    cfg.row_starts_with_zero = row_zero;
    let grid = Grid::new(cfg).unwrap();

    let column_start = u32::from(!column_zero);
    let row_start = u32::from(!row_zero);

    for table in grid.rendered().tables() {
        let mut seen = HashSet::new();
        for row in &table.rows {
            for cell in &row.cells {
                assert!(seen.insert(cell.coordinate.clone()));
                let coord = parse_coordinate(&cell.coordinate).unwrap();
                assert_eq!(coord.row, row.header);
                assert!(coord.row >= row_start && coord.row < row_start + 3);
                assert!(coord.column >= table.column_offset + column_start);
                assert!(coord.column < table.column_offset + column_start + 4);
            }
        }
        assert_eq!(seen.len(), 12);
    }
}

#[test]
fn test_column_headers_follow_offset() {
    let mut cfg = config(14, 10, 3, 69);
    cfg.column_starts_with_zero = true;
    let layout = GridLayout::new(&cfg).unwrap();
    let offsets: Vec<u32> = layout.tables().map(|t| t.column_offset).collect();
    assert_eq!(offsets, [0, 14, 28, 42, 56]);

    let last = layout.tables().last().unwrap();
    assert_eq!(last.columns.first(), Some(&56));
    assert_eq!(last.columns.last(), Some(&69));
}

#[test_case(0, 1, 1, 1 ; "zero columns")]
#[test_case(1, 0, 1, 1 ; "zero rows")]
#[test_case(1, 1, 0, 1 ; "zero tables per page")]
#[test_case(1, 1, 1, 0 ; "zero final columns")]
fn test_zero_dimension_rejected(columns: u32, rows: u32, per_page: u32, final_columns: u32) {
    let err = Grid::new(config(columns, rows, per_page, final_columns)).unwrap_err();
    assert!(matches!(err, GridmarkError::Config(_)));
}

#[test_case(u32::MAX, 1, 1, 1 ; "max columns")]
#[test_case(u32::MAX - 1, 1, 1, u32::MAX ; "second table past max column")]
#[test_case(1, u32::MAX, 1, 1 ; "max rows")]
fn test_oversized_dimension_rejected(columns: u32, rows: u32, per_page: u32, final_columns: u32) {
    let err = Grid::new(config(columns, rows, per_page, final_columns)).unwrap_err();
    match err {
        GridmarkError::Config(msg) => assert!(msg.contains("too large"), "{msg}"),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_orientation_class() {
    let mut cfg = config(2, 2, 1, 2);
    cfg.horizontal_orientation = true;
    let grid = Grid::new(cfg).unwrap();
    assert!(grid
        .to_html()
        .starts_with(r#"<div class="table-container horizontal">"#));

    let grid = Grid::new(config(2, 2, 1, 2)).unwrap();
    assert!(grid
        .to_html()
        .starts_with(r#"<div class="table-container vertical">"#));
}
