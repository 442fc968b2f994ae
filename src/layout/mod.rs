//! Layout engine for paginated coordinate tables.
//!
//! This module handles:
//! - Splitting the final column count into fixed-width tables
//! - Grouping tables into pages
//! - Column and row numbering (0- or 1-based)

mod grid_layout;

pub use grid_layout::{GridLayout, TableLayout};
