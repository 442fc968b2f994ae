//! Utilities for `"<column>.<row>"` cell coordinates.
//!
//! Highlight comparison does not look at the column and row separately: the
//! whole coordinate string is read as one decimal number, so the row acts as
//! the fractional part of the column. `"5.10"` and `"5.1"` therefore compare
//! equal, and `"5.9"` sorts above `"5.10"`.

use std::fmt;
use std::str::FromStr;

use crate::error::GridmarkError;

/// A grid cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Absolute column (table-local column plus the table's column offset).
    pub column: u32,
    pub row: u32,
}

impl Coordinate {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.column, self.row)
    }
}

impl FromStr for Coordinate {
    type Err = GridmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s).ok_or_else(|| GridmarkError::Other(format!("invalid coordinate: {s}")))
    }
}

/// Parse a strict `"<column>.<row>"` string into a [`Coordinate`].
pub fn parse_coordinate(s: &str) -> Option<Coordinate> {
    let (column, row) = s.trim().split_once('.')?;
    if column.is_empty() || row.is_empty() {
        return None;
    }
    if !column.bytes().all(|b| b.is_ascii_digit()) || !row.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(Coordinate {
        column: column.parse().ok()?,
        row: row.parse().ok()?,
    })
}

/// Read any coordinate-like string as a decimal number.
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite
/// input yields `None`, which never matches or exceeds any cell.
pub fn numeric_value(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_parse() {
        let coord = Coordinate::new(12, 7);
        assert_eq!(coord.to_string(), "12.7");
        assert_eq!(parse_coordinate("12.7"), Some(coord));
        assert_eq!("12.7".parse::<Coordinate>().unwrap(), coord);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("5"), None);
        assert_eq!(parse_coordinate("5."), None);
        assert_eq!(parse_coordinate(".3"), None);
        assert_eq!(parse_coordinate("a.b"), None);
        assert_eq!(parse_coordinate("-1.2"), None);
        assert!("x".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_numeric_value_treats_row_as_fraction() {
        assert_eq!(numeric_value("5.3"), Some(5.3));
        assert_eq!(numeric_value(" 5.3 "), Some(5.3));
        assert_eq!(numeric_value("5.10"), numeric_value("5.1"));
        assert!(numeric_value("5.9") > numeric_value("5.10"));
    }

    #[test]
    fn test_numeric_value_rejects_non_numbers() {
        assert_eq!(numeric_value(""), None);
        assert_eq!(numeric_value("   "), None);
        assert_eq!(numeric_value("abc"), None);
        assert_eq!(numeric_value("inf"), None);
        assert_eq!(numeric_value("NaN"), None);
    }
}
