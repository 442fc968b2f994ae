//! The grid widget: configuration, highlights and the current render.
//!
//! Every mutation runs the same refresh cycle:
//!
//! 1. render against the current highlights,
//! 2. merge the inherited highlights that pass collected,
//! 3. re-render once if anything was merged.
//!
//! Inheritance only writes for cells without a registered color, so the
//! second pass collects nothing new and the cycle settles.

use log::{debug, warn};

use crate::config::GridConfig;
use crate::error::Result;
use crate::highlight::HighlightStore;
use crate::layout::GridLayout;
use crate::render::{render_pass, RenderPass};
use crate::types::{HighlightBatch, HighlightId, Orientation, RenderedGrid};

/// Highlights the host application seeds on mount.
pub const DEMO_HIGHLIGHTS: [(&str, &str); 3] = [("2.2", "yellow"), ("3.2", "brown"), ("4.2", "red")];

/// A paginated coordinate grid with highlight state.
#[derive(Debug, Clone)]
pub struct Grid {
    config: GridConfig,
    layout: GridLayout,
    store: HighlightStore,
    rendered: RenderedGrid,
    /// Store generation the current render reflects.
    rendered_generation: u64,
    render_count: u64,
}

impl Grid {
    /// Build the grid and run the initial render.
    ///
    /// # Errors
    /// Returns a config error if any dimension is zero.
    pub fn new(config: GridConfig) -> Result<Self> {
        let layout = GridLayout::new(&config)?;
        let store = HighlightStore::new();
        let RenderPass { grid, .. } = render_pass(&layout, Self::orientation_of(&config), &store);
        debug!(
            "grid mounted: {} page(s), {} table(s)",
            layout.pages.len(),
            layout.table_count()
        );
        Ok(Self {
            config,
            layout,
            rendered_generation: store.generation(),
            store,
            rendered: grid,
            render_count: 1,
        })
    }

    /// Grid configured like the host application's demo, with its three
    /// seeded highlights applied.
    ///
    /// # Errors
    /// Propagates config errors from [`Grid::new`].
    pub fn demo() -> Result<Self> {
        let mut grid = Self::new(GridConfig {
            column_starts_with_zero: true,
            row_starts_with_zero: true,
            ..GridConfig::default()
        })?;
        grid.seed_demo();
        Ok(grid)
    }

    /// Apply the host application's initial highlights.
    pub fn seed_demo(&mut self) {
        for (coordinate, color) in DEMO_HIGHLIGHTS {
            self.highlight_cell(coordinate, color);
        }
    }

    /// Add an explicit highlight and re-render.
    pub fn highlight_cell(&mut self, coordinate: &str, color: &str) -> HighlightId {
        let id = self.store.highlight_cell(coordinate, color);
        self.refresh();
        id
    }

    /// Clear all highlights and history, then re-render.
    pub fn reset_highlights(&mut self) {
        self.store.reset_highlights();
        self.refresh();
    }

    /// Undo the most recent highlight batch. Returns `false` when the
    /// history was empty.
    pub fn undo_last_highlight(&mut self) -> bool {
        let undone: Option<HighlightBatch> = self.store.undo_last_highlight();
        if undone.is_some() {
            self.refresh();
        }
        undone.is_some()
    }

    /// Bring the render up to date with the store.
    ///
    /// Returns the number of render passes run (0 when already current).
    pub fn refresh(&mut self) -> u32 {
        if self.store.generation() == self.rendered_generation {
            return 0;
        }

        let orientation = self.orientation();
        let first = render_pass(&self.layout, orientation, &self.store);
        let mut passes = 1;

        self.rendered = if first.pending.is_empty() {
            first.grid
        } else {
            self.store.merge_inherited(first.pending);
            let second = render_pass(&self.layout, orientation, &self.store);
            passes += 1;
            if !second.pending.is_empty() {
                warn!(
                    "{} inherited highlight(s) still pending after re-render",
                    second.pending.len()
                );
            }
            second.grid
        };

        self.rendered_generation = self.store.generation();
        self.render_count += u64::from(passes);
        passes
    }

    pub fn rendered(&self) -> &RenderedGrid {
        &self.rendered
    }

    pub fn store(&self) -> &HighlightStore {
        &self.store
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Background color the cell at `coordinate` currently renders with.
    pub fn cell_color(&self, coordinate: &str) -> Option<&str> {
        self.rendered.background(coordinate)
    }

    /// Total render passes since construction.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn orientation(&self) -> Orientation {
        Self::orientation_of(&self.config)
    }

    fn orientation_of(config: &GridConfig) -> Orientation {
        Orientation::from_flag(config.horizontal_orientation)
    }

    /// Current render as an HTML fragment.
    pub fn to_html(&self) -> String {
        crate::render::html::render_fragment(&self.rendered)
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

    fn small_grid() -> Grid {
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

    #[test]
    fn test_initial_render_is_plain() {
        let grid = small_grid();
        assert_eq!(grid.rendered().table_count(), 2);
        assert_eq!(grid.rendered().highlighted_count(), 0);
        assert_eq!(grid.render_count(), 1);
    }

    #[test]
    fn test_inheritance_settles_in_two_passes() {
        let mut grid = small_grid();
        grid.highlight_cell("1.1", "red");
        assert_eq!(grid.render_count(), 3);

        // Nothing changed since; refresh is a no-op.
        assert_eq!(grid.refresh(), 0);

        // Inherited cells are now registered as inactive records.
        let record = grid.store().get("0.0").unwrap();
        assert!(!record.is_active);
        assert_eq!(record.color, "red");
    }

    #[test]
    fn test_highlight_without_inheritance_renders_once() {
        let mut grid = small_grid();
        // 0.0 is the lowest cell; nothing falls below it.
        grid.highlight_cell("0.0", "blue");
        assert_eq!(grid.render_count(), 2);
        assert_eq!(grid.cell_color("0.0"), Some("blue"));
        assert_eq!(grid.store().len(), 1);
    }

    #[test]
    fn test_noop_undo_skips_render() {
        let mut grid = small_grid();
        assert!(!grid.undo_last_highlight());
        assert_eq!(grid.render_count(), 1);
    }

    #[test]
    fn test_demo_seed() {
        let grid = Grid::demo().unwrap();
        assert_eq!(grid.store().history().len(), 3);
        assert_eq!(grid.cell_color("2.2"), Some("yellow"));
        assert_eq!(grid.cell_color("3.2"), Some("brown"));
        assert_eq!(grid.cell_color("4.2"), Some("red"));
    }
}
