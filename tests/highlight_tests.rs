//! Tests for highlight, reset and undo through the grid widget.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridmark::{Grid, GridConfig};
use test_case::test_case;

/// Zero-based 10x5 grid split into two tables: cells 0.0 through 9.4.
fn grid() -> Grid {
    Grid::new(GridConfig {
        num_columns: 5,
        num_rows: 5,
        num_tables_per_page: 2,
        num_final_columns: 10,
        horizontal_orientation: false,
        column_starts_with_zero: true,
        row_starts_with_zero: true,
    })
    .unwrap()
}

/// Zero-based grid with two-digit rows.
fn tall_grid() -> Grid {
    Grid::new(GridConfig {
        num_columns: 6,
        num_rows: 12,
        num_tables_per_page: 1,
        num_final_columns: 6,
        horizontal_orientation: false,
        column_starts_with_zero: true,
        row_starts_with_zero: true,
    })
    .unwrap()
}

#[test]
fn test_highlight_renders_and_records_history() {
    let mut grid = grid();
    let id = grid.highlight_cell("5.3", "red");

    assert_eq!(grid.cell_color("5.3"), Some("red"));
    assert_eq!(grid.store().history(), &[id]);
    let record = grid.store().get("5.3").unwrap();
    assert!(record.is_active);
    assert_eq!(record.id, id);
}

#[test]
fn test_highlight_then_undo() {
    let mut grid = grid();
    grid.highlight_cell("5.3", "red");
    assert!(grid.undo_last_highlight());

    assert!(grid.store().get("5.3").is_none());
    assert!(grid.store().history().is_empty());
    assert!(grid.store().records().is_empty());
    assert_eq!(grid.rendered().highlighted_count(), 0);
}

#[test]
fn test_inherited_cells_share_the_explicit_id() {
    let mut grid = grid();
    let id = grid.highlight_cell("1.2", "green");

    // Every cell numerically below 1.2 inherits.
    for coord in ["0.0", "0.4", "1.0", "1.1"] {
        assert_eq!(grid.cell_color(coord), Some("green"), "{coord}");
        let record = grid.store().get(coord).unwrap();
        assert!(!record.is_active);
        assert_eq!(record.id, id);
    }
    for coord in ["1.3", "2.0", "9.4"] {
        assert_eq!(grid.cell_color(coord), None, "{coord}");
        assert!(grid.store().get(coord).is_none());
    }

    let batch = grid.store().batch(&id).unwrap();
    assert_eq!(batch.origin, "1.2");
    assert_eq!(batch.inherited_count(), grid.store().len() - 1);
}

#[test]
fn test_undo_removes_inherited_batch_only() {
    let mut grid = grid();
    grid.highlight_cell("2.2", "yellow");
    let yellow_count = grid.store().len();
    grid.highlight_cell("4.4", "red");
    assert!(grid.store().len() > yellow_count);

    grid.undo_last_highlight();
    assert_eq!(grid.store().len(), yellow_count);
    assert_eq!(grid.cell_color("2.2"), Some("yellow"));
    assert_eq!(grid.cell_color("1.0"), Some("yellow"));
    assert_eq!(grid.cell_color("3.3"), None);
    assert_eq!(grid.cell_color("4.4"), None);
}

#[test]
fn test_scan_order_not_nearest() {
    let mut grid = grid();
    grid.highlight_cell("2.2", "yellow");
    grid.highlight_cell("4.4", "red");

    // 2.2 is scanned first but is below 3.3; 4.4 is the first entry
    // at or above it.
    assert_eq!(grid.cell_color("3.3"), Some("red"));
    // Cells below 2.2 were claimed by the yellow pass before red existed.
    assert_eq!(grid.cell_color("2.1"), Some("yellow"));

    let mut grid = self::grid();
    grid.highlight_cell("4.4", "red");
    grid.highlight_cell("3.4", "blue");

    // 3.4 is nearer to 3.3, but 4.4 comes first in scan order and every
    // cell below it already inherited red.
    assert_eq!(grid.cell_color("3.3"), Some("red"));
    assert_eq!(grid.cell_color("3.4"), Some("red"));
    assert!(grid.store().get("3.4").unwrap().is_active);
}

#[test]
fn test_overwriting_inherited_cell_changes_only_that_record() {
    let mut grid = grid();
    grid.highlight_cell("4.4", "red");
    grid.highlight_cell("3.3", "blue");

    // The overwrite keeps 3.3's position behind 4.4, so it still renders
    // red even though its record is now the blue explicit one.
    assert_eq!(grid.cell_color("3.3"), Some("red"));
    let record = grid.store().get("3.3").unwrap();
    assert_eq!(record.color, "blue");
    assert!(record.is_active);

    // Undo drops the blue record; the re-render hands 3.3 back to red.
    grid.undo_last_highlight();
    assert_eq!(grid.cell_color("3.3"), Some("red"));
    let record = grid.store().get("3.3").unwrap();
    assert!(!record.is_active);
    assert_eq!(record.id, grid.store().get("4.4").unwrap().id);
}

#[test]
fn test_multi_digit_rows_compare_as_decimals() {
    let mut grid = tall_grid();
    grid.highlight_cell("3.1", "purple");

    // "3.10" parses to the same number as "3.1".
    assert_eq!(grid.cell_color("3.10"), Some("purple"));
    // "3.11" reads as 3.11, above 3.1.
    assert_eq!(grid.cell_color("3.11"), None);
    // "3.0" is below and inherits.
    assert_eq!(grid.cell_color("3.0"), Some("purple"));
}

#[test_case("" ; "empty")]
#[test_case("abc" ; "non numeric")]
#[test_case("   " ; "whitespace")]
fn test_malformed_coordinate_is_silent(coordinate: &str) {
    let mut grid = grid();
    grid.highlight_cell(coordinate, "red");

    assert_eq!(grid.store().history().len(), 1);
    assert_eq!(grid.rendered().highlighted_count(), 0);
    assert_eq!(grid.store().len(), 1);
}

#[test]
fn test_reset_clears_everything_and_is_idempotent() {
    let mut grid = grid();
    grid.highlight_cell("2.2", "yellow");
    grid.highlight_cell("4.4", "red");
    grid.highlight_cell("9.0", "blue");

    grid.reset_highlights();
    assert!(grid.store().records().is_empty());
    assert!(grid.store().history().is_empty());
    assert_eq!(grid.rendered().highlighted_count(), 0);
    let once = grid.rendered().clone();

    grid.reset_highlights();
    assert!(grid.store().is_empty());
    assert_eq!(grid.rendered(), &once);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut grid = grid();
    let before = grid.rendered().clone();
    assert!(!grid.undo_last_highlight());
    assert_eq!(grid.rendered(), &before);

    grid.highlight_cell("1.1", "red");
    grid.undo_last_highlight();
    assert!(!grid.undo_last_highlight());
}

#[test]
fn test_rerender_is_stable() {
    let mut grid = grid();
    grid.highlight_cell("2.2", "yellow");
    grid.highlight_cell("4.4", "red");
    let settled = grid.rendered().clone();
    let records = grid.store().len();

    // Another render against the merged map changes nothing.
    assert_eq!(grid.refresh(), 0);
    let pass = gridmark::render::render_pass(grid.layout(), grid.orientation(), grid.store());
    assert!(pass.pending.is_empty());
    assert_eq!(pass.grid, settled);
    assert_eq!(grid.store().len(), records);
}

#[test]
fn test_inheritance_overwrites_empty_color_record() {
    let mut grid = grid();
    let red = grid.highlight_cell("4.4", "red");
    let empty = grid.highlight_cell("3.3", "");

    // The empty explicit record keeps 3.3's slot behind 4.4, so the render
    // treats it as unregistered and replaces it with an inherited copy.
    assert_eq!(grid.cell_color("3.3"), Some("red"));
    let record = grid.store().get("3.3").unwrap();
    assert_eq!(record.color, "red");
    assert!(!record.is_active);
    assert_eq!(record.id, red);
    assert!(grid.store().batch(&empty).unwrap().members.is_empty());
    assert!(grid.store().batch(&red).unwrap().members.contains("3.3"));

    // The empty request owns nothing any more.
    assert!(grid.undo_last_highlight());
    assert_eq!(grid.cell_color("3.3"), Some("red"));

    assert!(grid.undo_last_highlight());
    assert!(grid.store().get("3.3").is_none());
    assert_eq!(grid.cell_color("3.3"), None);
    assert!(grid.store().records().is_empty());
}

#[test]
fn test_empty_color_scanned_first_stays_exact() {
    let mut grid = grid();
    grid.highlight_cell("3.3", "");
    let red = grid.highlight_cell("4.4", "red");

    // 3.3 is scanned before 4.4 and matches itself exactly.
    assert_eq!(grid.cell_color("3.3"), Some(""));
    let record = grid.store().get("3.3").unwrap();
    assert_eq!(record.color, "");
    assert!(record.is_active);
    assert_ne!(record.id, red);
    assert_eq!(grid.cell_color("4.0"), Some("red"));

    assert!(grid.undo_last_highlight());
    assert!(grid.store().get("4.4").is_none());
    assert!(grid.store().get("3.3").unwrap().is_active);
}
