//! `GridView` - the JavaScript-facing grid widget.
//!
//! This module provides the WASM-exported `GridView` struct that handles:
//! - Building a [`Grid`] from a plain JS config object
//! - The host operations `highlightCell`, `resetHighlights` and
//!   `undoLastHighlight`
//! - Writing the rendered tables into a container element after every
//!   change and notifying an optional render callback
//!
//! The same struct builds natively (without DOM access) for tests and the CLI.

#[cfg(target_arch = "wasm32")]
mod console;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;

use crate::config::GridConfig;
use crate::grid::Grid;

/// The grid widget exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    grid: Grid,
    #[cfg(target_arch = "wasm32")]
    container: Option<HtmlElement>,
    #[cfg(target_arch = "wasm32")]
    render_callback: Option<Function>,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a grid from a config object such as
    /// `{ numColumns: 14, numRows: 10, numTablesPerPage: 3, numFinalColumns: 69 }`.
    ///
    /// When `container` is given, the rendered tables are written into it
    /// immediately and after every change.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, container: Option<HtmlElement>) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        console::init(log::LevelFilter::Warn);

        let config: GridConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid grid configuration: {e}")))?;
        let grid = Grid::new(config)?;

        let view = GridView {
            grid,
            container,
            render_callback: None,
        };
        view.paint();
        Ok(view)
    }

    /// Register a JS callback invoked after every re-render.
    #[wasm_bindgen(js_name = setRenderCallback)]
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        self.render_callback = callback;
    }

    /// Set the console log level ("error", "warn", "info", "debug", "trace", "off").
    #[wasm_bindgen(js_name = setLogLevel)]
    pub fn set_log_level(&self, level: &str) {
        let filter = level.parse().unwrap_or(log::LevelFilter::Warn);
        console::init(filter);
    }

    /// The current render as a plain JS object (pages, tables, rows, cells).
    #[wasm_bindgen(js_name = renderedGrid)]
    pub fn rendered_grid(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.grid.rendered())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// The highlight map as a plain JS object keyed by coordinate.
    #[wasm_bindgen]
    pub fn highlights(&self) -> Result<JsValue, JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        self.grid
            .store()
            .records()
            .serialize(&serializer)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    fn paint(&self) {
        if let Some(container) = &self.container {
            container.set_inner_html(&self.grid.to_html());
        }
        if let Some(callback) = &self.render_callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }
}

// ============================================================================
// Non-WASM32 Implementation (for tests/CLI)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Create a view without a DOM container.
    ///
    /// # Errors
    /// Returns a config error if any dimension is zero.
    pub fn from_config(config: GridConfig) -> crate::error::Result<Self> {
        Ok(GridView {
            grid: Grid::new(config)?,
        })
    }

    #[allow(clippy::unused_self)]
    fn paint(&self) {}
}

// ============================================================================
// Shared host operations
// ============================================================================

#[wasm_bindgen]
impl GridView {
    /// Highlight the cell at `coordinates` (e.g. `"5.3"`) with any CSS color.
    ///
    /// Returns the id of the new highlight batch.
    #[wasm_bindgen(js_name = highlightCell)]
    pub fn highlight_cell(&mut self, coordinates: &str, color: &str) -> String {
        let id = self.grid.highlight_cell(coordinates, color);
        self.paint();
        id.to_string()
    }

    /// Clear all highlights and the undo history.
    #[wasm_bindgen(js_name = resetHighlights)]
    pub fn reset_highlights(&mut self) {
        self.grid.reset_highlights();
        self.paint();
    }

    /// Remove the most recent highlight and everything inherited from it.
    ///
    /// Returns `false` (and does nothing) when there is nothing to undo.
    #[wasm_bindgen(js_name = undoLastHighlight)]
    pub fn undo_last_highlight(&mut self) -> bool {
        let undone = self.grid.undo_last_highlight();
        if undone {
            self.paint();
        }
        undone
    }

    /// Apply the demo highlights (`2.2` yellow, `3.2` brown, `4.2` red).
    #[wasm_bindgen(js_name = seedDemo)]
    pub fn seed_demo(&mut self) {
        self.grid.seed_demo();
        self.paint();
    }

    /// Background color the cell renders with, if highlighted.
    #[wasm_bindgen(js_name = cellColor)]
    pub fn cell_color(&self, coordinates: &str) -> Option<String> {
        self.grid.cell_color(coordinates).map(str::to_string)
    }

    /// Number of highlight requests that can still be undone.
    #[wasm_bindgen(js_name = historyLength)]
    pub fn history_length(&self) -> usize {
        self.grid.store().history().len()
    }

    /// Number of coordinates holding a highlight (explicit or inherited).
    #[wasm_bindgen(js_name = highlightCount)]
    pub fn highlight_count(&self) -> usize {
        self.grid.store().len()
    }

    /// The current render as an HTML fragment.
    #[wasm_bindgen]
    pub fn html(&self) -> String {
        self.grid.to_html()
    }

    /// The current render as JSON text.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.grid.rendered())
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }
}

impl GridView {
    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_host_operations() {
        let mut view = GridView::from_config(GridConfig {
            column_starts_with_zero: true,
            row_starts_with_zero: true,
            ..GridConfig::default()
        })
        .unwrap();

        let id = view.highlight_cell("5.3", "red");
        assert_eq!(id.len(), 36);
        assert_eq!(view.cell_color("5.3").as_deref(), Some("red"));
        assert_eq!(view.history_length(), 1);
        assert!(view.html().contains("background-color: red"));

        assert!(view.undo_last_highlight());
        assert_eq!(view.cell_color("5.3"), None);
        assert_eq!(view.highlight_count(), 0);
        assert!(!view.undo_last_highlight());
    }

    #[test]
    fn test_json_render() {
        let mut view = GridView::from_config(GridConfig::default()).unwrap();
        view.seed_demo();
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
        assert_eq!(json["orientation"], "vertical");
        assert_eq!(json["pages"].as_array().unwrap().len(), 2);
    }
}
