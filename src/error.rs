//! Structured error types for gridmark.
//!
//! Highlight operations never fail; errors come from building a grid with
//! bad parameters or from reading configuration.

/// All errors that can occur while configuring or rendering a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridmarkError {
    /// Invalid construction parameter.
    #[error("Invalid grid configuration: {0}")]
    Config(String),

    /// Malformed JSON configuration document.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridmarkError>;

#[cfg(target_arch = "wasm32")]
impl From<GridmarkError> for wasm_bindgen::JsValue {
    fn from(e: GridmarkError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
