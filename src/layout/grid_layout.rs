//! Pre-computed table skeletons for a grid.
//!
//! Computed once per [`GridConfig`]; highlights never change the layout, so
//! every render pass reuses it.

use crate::config::GridConfig;
use crate::coordinate::Coordinate;
use crate::error::Result;

/// Column and row numbering for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// 1-based table number across the whole grid.
    pub number: u32,
    /// Column offset this table starts at (a multiple of `numColumns`).
    pub column_offset: u32,
    /// Absolute column numbers, shown in the header row and used in
    /// coordinates.
    pub columns: Vec<u32>,
    /// Row numbers, shown in the header column.
    pub rows: Vec<u32>,
}

impl TableLayout {
    /// Coordinates of every cell, row by row.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows.iter().flat_map(move |&row| {
            self.columns
                .iter()
                .map(move |&column| Coordinate::new(column, row))
        })
    }
}

/// Tables grouped into pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub pages: Vec<Vec<TableLayout>>,
}

impl GridLayout {
    /// Generate every table for `config`.
    ///
    /// Starting at column offset 0, one table of `numColumns` columns is
    /// emitted per step until the offset reaches `numFinalColumns`. Tables
    /// are grouped `numTablesPerPage` to a page.
    ///
    /// # Errors
    /// Returns a config error if any dimension is zero or too large.
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;

        let column_start = config.column_start();
        let row_start = config.row_start();
        let rows: Vec<u32> = (row_start..row_start + config.num_rows).collect();
        let per_page = config.num_tables_per_page as usize;

        let mut pages: Vec<Vec<TableLayout>> = Vec::new();
        let mut number = 0u32;
        let mut offset = 0u32;

        while offset < config.num_final_columns {
            if number as usize % per_page == 0 {
                pages.push(Vec::with_capacity(per_page));
            }
            let columns = (column_start..column_start + config.num_columns)
                .map(|local| local + offset)
                .collect();
            number += 1;
            if let Some(page) = pages.last_mut() {
                page.push(TableLayout {
                    number,
                    column_offset: offset,
                    columns,
                    rows: rows.clone(),
                });
            }
            offset = offset.saturating_add(config.num_columns);
        }

        Ok(Self { pages })
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableLayout> {
        self.pages.iter().flatten()
    }

    pub fn table_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    pub fn cell_count(&self) -> usize {
        self.tables()
            .map(|table| table.columns.len() * table.rows.len())
            .sum()
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
    use crate::error::GridmarkError;

    fn config(columns: u32, rows: u32, per_page: u32, final_columns: u32) -> GridConfig {
        GridConfig {
            num_columns: columns,
            num_rows: rows,
            num_tables_per_page: per_page,
            num_final_columns: final_columns,
            ..GridConfig::default()
        }
    }

    #[test]
    fn test_host_layout_pages() {
        let layout = GridLayout::new(&GridConfig::default()).unwrap();
        assert_eq!(layout.table_count(), 5);
        assert_eq!(layout.pages.len(), 2);
        assert_eq!(layout.pages[0].len(), 3);
        assert_eq!(layout.pages[1].len(), 2);
    }

    #[test]
    fn test_one_based_numbering() {
        let layout = GridLayout::new(&config(3, 2, 2, 6)).unwrap();
        let tables: Vec<_> = layout.tables().collect();
        assert_eq!(tables[0].columns, vec![1, 2, 3]);
        assert_eq!(tables[1].columns, vec![4, 5, 6]);
        assert_eq!(tables[1].column_offset, 3);
        assert_eq!(tables[0].rows, vec![1, 2]);
    }

    #[test]
    fn test_zero_based_numbering() {
        let mut cfg = config(3, 2, 2, 6);
        cfg.column_starts_with_zero = true;
        cfg.row_starts_with_zero = true;
        let layout = GridLayout::new(&cfg).unwrap();
        let tables: Vec<_> = layout.tables().collect();
        assert_eq!(tables[0].columns, vec![0, 1, 2]);
        assert_eq!(tables[1].columns, vec![3, 4, 5]);
        assert_eq!(tables[0].rows, vec![0, 1]);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut cfg = config(2, 2, 1, 2);
        cfg.column_starts_with_zero = true;
        let layout = GridLayout::new(&cfg).unwrap();
        let table = layout.tables().next().unwrap();
        assert_eq!(table.columns, vec![0, 1]);
        assert_eq!(table.rows, vec![1, 2]);
    }

    #[test]
    fn test_coordinates_row_major() {
        let layout = GridLayout::new(&config(2, 2, 1, 2)).unwrap();
        let coords: Vec<String> = layout
            .tables()
            .next()
            .unwrap()
            .coordinates()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(coords, ["1.1", "2.1", "1.2", "2.2"]);
        assert_eq!(layout.cell_count(), 4);
    }

    #[test]
    fn test_zero_dimension_fails_fast() {
        let err = GridLayout::new(&config(0, 2, 1, 4)).unwrap_err();
        assert!(matches!(err, GridmarkError::Config(_)));
        let err = GridLayout::new(&config(2, 2, 0, 4)).unwrap_err();
        assert!(matches!(err, GridmarkError::Config(_)));
    }
}
