//! One render pass: layout + highlights in, rendered grid + pending
//! inherited highlights out.
//!
//! A pass never mutates the store. Inherited records are returned so the
//! caller can merge them once the whole grid has been generated.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::highlight::inherit::decide;
use crate::highlight::HighlightStore;
use crate::layout::{GridLayout, TableLayout};
use crate::types::{Cell, HighlightRecord, Orientation, Page, RenderedGrid, Row, Table};

/// Result of [`render_pass`].
#[derive(Debug, Clone)]
pub struct RenderPass {
    pub grid: RenderedGrid,
    /// Records to merge for cells that inherited a color and had none of
    /// their own, in generation order.
    pub pending: IndexMap<String, HighlightRecord>,
}

/// Render every table of `layout` against the current highlights.
pub fn render_pass(
    layout: &GridLayout,
    orientation: Orientation,
    store: &HighlightStore,
) -> RenderPass {
    let mut pending = IndexMap::new();

    let pages = layout
        .pages
        .iter()
        .enumerate()
        .map(|(index, tables)| Page {
            index,
            tables: tables
                .iter()
                .map(|table| render_table(table, store, &mut pending))
                .collect(),
        })
        .collect();

    let grid = RenderedGrid { orientation, pages };
    debug!(
        "render pass: {} table(s), {} highlighted cell(s), {} pending inherit(s)",
        grid.table_count(),
        grid.highlighted_count(),
        pending.len()
    );
    RenderPass { grid, pending }
}

fn render_table(
    table: &TableLayout,
    store: &HighlightStore,
    pending: &mut IndexMap<String, HighlightRecord>,
) -> Table {
    let rows = table
        .rows
        .iter()
        .map(|&row| Row {
            header: row,
            cells: table
                .columns
                .iter()
                .map(|&column| {
                    let coordinate = format!("{column}.{row}");
                    let decision = decide(&coordinate, store);
                    let background = decision.color().map(str::to_string);
                    if let Some(record) = decision.pending_record() {
                        trace!("{coordinate} inherits {} from {}", record.color, record.id);
                        pending.insert(coordinate.clone(), record);
                    }
                    Cell {
                        coordinate,
                        background,
                    }
                })
                .collect(),
        })
        .collect();

    Table {
        number: table.number,
        column_offset: table.column_offset,
        column_headers: table.columns.clone(),
        rows,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn zero_based(columns: u32, rows: u32, final_columns: u32) -> GridLayout {
        GridLayout::new(&GridConfig {
            num_columns: columns,
            num_rows: rows,
            num_tables_per_page: 2,
            num_final_columns: final_columns,
            horizontal_orientation: false,
            column_starts_with_zero: true,
            row_starts_with_zero: true,
        })
        .unwrap()
    }

    #[test]
    fn test_pass_without_highlights_is_plain() {
        let layout = zero_based(3, 3, 6);
        let pass = render_pass(&layout, Orientation::Vertical, &HighlightStore::new());
        assert_eq!(pass.grid.highlighted_count(), 0);
        assert!(pass.pending.is_empty());
        assert_eq!(pass.grid.cells().count(), 18);
    }

    #[test]
    fn test_pass_collects_pending_without_mutating() {
        let layout = zero_based(3, 3, 6);
        let mut store = HighlightStore::new();
        store.highlight_cell("1.1", "red");
        let generation = store.generation();

        let pass = render_pass(&layout, Orientation::Vertical, &store);

        assert_eq!(store.generation(), generation);
        // Every cell numerically below 1.1: 0.0, 0.1, 0.2, 1.0.
        let keys: Vec<&str> = pass.pending.keys().map(String::as_str).collect();
        assert_eq!(keys, ["0.0", "1.0", "0.1", "0.2"]);
        assert_eq!(pass.grid.background("1.1"), Some("red"));
        assert_eq!(pass.grid.background("0.2"), Some("red"));
        assert_eq!(pass.grid.background("1.2"), None);
    }
}
