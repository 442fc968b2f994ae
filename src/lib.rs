//! gridmark - paginated coordinate tables with cell highlighting
//!
//! Renders a grid of `"<column>.<row>"` cells split into fixed-width tables
//! and pages, and lets the host mark cells with a color:
//! - Explicit highlights spread their color to lower-valued cells
//! - Undo removes a highlight together with everything it spread to
//! - HTML output for the browser (via WebAssembly) or the CLI
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridmark';
//! await init();
//! const view = new GridView(
//!   { numColumns: 14, numRows: 10, numTablesPerPage: 3, numFinalColumns: 69 },
//!   document.getElementById('grid'),
//! );
//! view.highlightCell('5.3', 'red');
//! view.undoLastHighlight();
//! ```

pub mod config;
pub mod coordinate;
pub mod error;
pub mod grid;
pub mod highlight;
pub mod layout;
pub mod render;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::GridConfig;
pub use error::{GridmarkError, Result};
pub use grid::Grid;
pub use viewer::GridView;

pub use types::*;

/// Render an unhighlighted grid for a JSON config and return its HTML.
///
/// # Errors
/// Returns an error if the config is malformed or has a zero dimension.
#[wasm_bindgen(js_name = renderGridHtml)]
pub fn render_grid_html(config_json: &str) -> std::result::Result<String, JsValue> {
    let config =
        GridConfig::from_json_str(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let grid = Grid::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(grid.to_html())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
