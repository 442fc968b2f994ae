//! Grid construction parameters.
//!
//! A [`GridConfig`] is fixed for the lifetime of a [`crate::grid::Grid`].
//! Field names serialize in camelCase so the same JSON object can be handed
//! to the CLI or to the JavaScript constructor.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridmarkError, Result};

/// Construction parameters for a paginated coordinate grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Columns in each table.
    pub num_columns: u32,
    /// Rows in each table.
    pub num_rows: u32,
    /// Tables grouped on one page (the last page may hold fewer).
    pub num_tables_per_page: u32,
    /// Total columns across all tables; generation stops once the column
    /// offset reaches this value.
    pub num_final_columns: u32,
    /// Lay tables out side by side instead of stacked.
    #[serde(default)]
    pub horizontal_orientation: bool,
    /// Number columns from 0 instead of 1.
    #[serde(default)]
    pub column_starts_with_zero: bool,
    /// Number rows from 0 instead of 1.
    #[serde(default)]
    pub row_starts_with_zero: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            num_columns: 14,
            num_rows: 10,
            num_tables_per_page: 3,
            num_final_columns: 69,
            horizontal_orientation: false,
            column_starts_with_zero: false,
            row_starts_with_zero: false,
        }
    }
}

impl GridConfig {
    /// Parse a config from a JSON document and validate it.
    ///
    /// # Errors
    /// Returns [`GridmarkError::Config`] for missing, negative or zero
    /// dimensions.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            if e.is_data() {
                GridmarkError::Config(e.to_string())
            } else {
                GridmarkError::Json(e)
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, otherwise the same
    /// errors as [`GridConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check that every dimension is positive and that every column and row
    /// number the layout generates fits in a `u32`.
    ///
    /// Zero columns would never advance the column offset, so this has to
    /// hold before any generation runs.
    ///
    /// # Errors
    /// Returns [`GridmarkError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("numColumns", self.num_columns),
            ("numRows", self.num_rows),
            ("numTablesPerPage", self.num_tables_per_page),
            ("numFinalColumns", self.num_final_columns),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(GridmarkError::Config(format!(
                    "{name} must be a positive integer"
                )));
            }
        }

        // Exclusive upper bounds of the row and column ranges.
        let row_end = u64::from(self.row_start()) + u64::from(self.num_rows);
        if row_end > u64::from(u32::MAX) {
            return Err(GridmarkError::Config(format!(
                "numRows too large: last row number exceeds {}",
                u32::MAX
            )));
        }
        let last_offset =
            u64::from(self.table_count().saturating_sub(1)) * u64::from(self.num_columns);
        let column_end =
            last_offset + u64::from(self.column_start()) + u64::from(self.num_columns);
        if column_end > u64::from(u32::MAX) {
            return Err(GridmarkError::Config(format!(
                "numColumns too large: last column number exceeds {}",
                u32::MAX
            )));
        }
        Ok(())
    }

    /// First column number shown in each table's header.
    pub fn column_start(&self) -> u32 {
        u32::from(!self.column_starts_with_zero)
    }

    /// First row number.
    pub fn row_start(&self) -> u32 {
        u32::from(!self.row_starts_with_zero)
    }

    /// Number of tables the grid generates: `ceil(numFinalColumns / numColumns)`.
    pub fn table_count(&self) -> u32 {
        self.num_final_columns.div_ceil(self.num_columns.max(1))
    }

    /// Number of pages the grid generates.
    pub fn page_count(&self) -> u32 {
        self.table_count().div_ceil(self.num_tables_per_page.max(1))
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

    #[test]
    fn test_default_matches_host_layout() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.table_count(), 5);
        assert_eq!(config.page_count(), 2);
    }

    #[test]
    fn test_parse_camel_case_with_flag_defaults() {
        let config = GridConfig::from_json_str(
            r#"{"numColumns": 4, "numRows": 3, "numTablesPerPage": 2, "numFinalColumns": 10}"#,
        )
        .unwrap();
        assert_eq!(config.num_columns, 4);
        assert!(!config.horizontal_orientation);
        assert!(!config.column_starts_with_zero);
        assert!(!config.row_starts_with_zero);
        assert_eq!(config.column_start(), 1);
        assert_eq!(config.row_start(), 1);
    }

    #[test]
    fn test_zero_dimension_is_config_error() {
        let err = GridConfig::from_json_str(
            r#"{"numColumns": 0, "numRows": 3, "numTablesPerPage": 2, "numFinalColumns": 10}"#,
        )
        .unwrap_err();
        match err {
            GridmarkError::Config(msg) => assert!(msg.contains("numColumns")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_dimension_is_config_error() {
        let err = GridConfig::from_json_str(
            r#"{"numColumns": 4, "numRows": -1, "numTablesPerPage": 2, "numFinalColumns": 10}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GridmarkError::Config(_)));
    }

    #[test]
    fn test_oversized_dimensions_are_config_errors() {
        let config = GridConfig {
            num_columns: u32::MAX,
            num_final_columns: 1,
            ..GridConfig::default()
        };
        match config.validate().unwrap_err() {
            GridmarkError::Config(msg) => assert!(msg.contains("numColumns too large")),
            other => panic!("expected config error, got {other:?}"),
        }

        // The last table starts past the largest representable column.
        let config = GridConfig {
            num_columns: 1 << 31,
            num_final_columns: u32::MAX,
            column_starts_with_zero: true,
            ..GridConfig::default()
        };
        assert!(matches!(config.validate(), Err(GridmarkError::Config(_))));

        let config = GridConfig {
            num_rows: u32::MAX,
            ..GridConfig::default()
        };
        match config.validate().unwrap_err() {
            GridmarkError::Config(msg) => assert!(msg.contains("numRows too large")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_syntax_error_is_json_error() {
        let err = GridConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, GridmarkError::Json(_)));
    }

    #[test]
    fn test_partial_last_table_counts() {
        let config = GridConfig {
            num_columns: 14,
            num_final_columns: 70,
            ..GridConfig::default()
        };
        assert_eq!(config.table_count(), 5);

        let config = GridConfig {
            num_columns: 14,
            num_final_columns: 71,
            ..GridConfig::default()
        };
        assert_eq!(config.table_count(), 6);
    }
}
