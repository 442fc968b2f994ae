//! Per-cell highlight decision.
//!
//! A cell takes the color of the first record, in map order, whose
//! coordinate reads as a number greater than or equal to the cell's. The
//! scan stops at the first hit: a closer record later in map order is never
//! considered.

use crate::coordinate::numeric_value;
use crate::types::HighlightRecord;

use super::HighlightStore;

/// Outcome of [`decide`] for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightDecision<'a> {
    /// No record matches or exceeds the cell.
    Unhighlighted,
    /// A record sits exactly on the cell's numeric value.
    Exact(&'a HighlightRecord),
    /// The cell borrows the color of a record with a greater value.
    Inherited {
        source: &'a HighlightRecord,
        /// The cell has no registered color yet, so an inactive copy of
        /// `source` should be merged for it after the pass.
        synthesize: bool,
    },
}

impl<'a> HighlightDecision<'a> {
    /// Background color for the cell, if highlighted.
    pub fn color(&self) -> Option<&'a str> {
        match self {
            Self::Unhighlighted => None,
            Self::Exact(record) => Some(record.color.as_str()),
            Self::Inherited { source, .. } => Some(source.color.as_str()),
        }
    }

    /// Record to queue for merging, if this decision synthesizes one.
    pub fn pending_record(&self) -> Option<HighlightRecord> {
        match self {
            Self::Inherited {
                source,
                synthesize: true,
            } => Some(HighlightRecord::inherited_from(source)),
            _ => None,
        }
    }
}

/// Decide how the cell at `coordinate` renders against `store`.
#[allow(clippy::float_cmp)]
pub fn decide<'a>(coordinate: &str, store: &'a HighlightStore) -> HighlightDecision<'a> {
    let Some(current) = numeric_value(coordinate) else {
        return HighlightDecision::Unhighlighted;
    };

    for (key, record) in store.iter() {
        let Some(target) = numeric_value(key) else {
            continue;
        };
        // Exact equality on the parsed values; "5.10" matches "5.1".
        if current == target {
            return HighlightDecision::Exact(record);
        }
        if current < target {
            return HighlightDecision::Inherited {
                source: record,
                synthesize: !store.has_color(coordinate),
            };
        }
    }

    HighlightDecision::Unhighlighted
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
    fn test_empty_store_leaves_cell_plain() {
        let store = HighlightStore::new();
        assert_eq!(decide("3.3", &store), HighlightDecision::Unhighlighted);
    }

    #[test]
    fn test_exact_match() {
        let mut store = HighlightStore::new();
        store.highlight_cell("5.3", "red");
        let decision = decide("5.3", &store);
        assert!(matches!(decision, HighlightDecision::Exact(r) if r.color == "red"));
        assert!(decision.pending_record().is_none());
    }

    #[test]
    fn test_first_greater_in_scan_order_wins() {
        let mut store = HighlightStore::new();
        store.highlight_cell("4.4", "red");
        store.highlight_cell("3.5", "blue");

        // 3.5 is closer to 3.3 but 4.4 is scanned first.
        let decision = decide("3.3", &store);
        assert_eq!(decision.color(), Some("red"));
        let pending = decision.pending_record().unwrap();
        assert!(!pending.is_active);
        assert_eq!(pending.id, store.get("4.4").unwrap().id);
    }

    #[test]
    fn test_smaller_records_are_skipped() {
        let mut store = HighlightStore::new();
        store.highlight_cell("2.2", "yellow");
        store.highlight_cell("4.4", "red");
        assert_eq!(decide("3.3", &store).color(), Some("red"));
        assert_eq!(decide("5.0", &store), HighlightDecision::Unhighlighted);
    }

    #[test]
    fn test_multi_digit_rows_collide() {
        let mut store = HighlightStore::new();
        store.highlight_cell("5.1", "green");
        assert!(matches!(decide("5.10", &store), HighlightDecision::Exact(_)));
        // 5.9 reads as greater than 5.10.
        assert_eq!(decide("5.9", &store), HighlightDecision::Unhighlighted);
    }

    #[test]
    fn test_malformed_keys_never_match() {
        let mut store = HighlightStore::new();
        store.highlight_cell("", "red");
        store.highlight_cell("abc", "blue");
        assert_eq!(decide("0.0", &store), HighlightDecision::Unhighlighted);
        assert_eq!(decide("3.3", &store), HighlightDecision::Unhighlighted);
    }

    #[test]
    fn test_registered_cell_is_not_synthesized_again() {
        let mut store = HighlightStore::new();
        store.highlight_cell("4.4", "red");
        let pending = decide("3.3", &store).pending_record().unwrap();
        let mut merge = indexmap::IndexMap::new();
        merge.insert("3.3".to_string(), pending);
        store.merge_inherited(merge);

        let decision = decide("3.3", &store);
        assert_eq!(decision.color(), Some("red"));
        assert!(decision.pending_record().is_none());
    }
}
