//! Highlight map, undo history and batch index.
//!
//! The map keeps entries in insertion order; overwriting an existing
//! coordinate keeps its original position. Inheritance scans depend on that
//! order (see [`inherit::decide`]).

pub mod inherit;

use std::collections::HashMap;

use indexmap::IndexMap;
use log::debug;

use crate::types::{HighlightBatch, HighlightId, HighlightRecord};

/// Coordinates mapped to their highlight, plus the undo stack.
#[derive(Debug, Default, Clone)]
pub struct HighlightStore {
    records: IndexMap<String, HighlightRecord>,
    /// One id per explicit highlight request, oldest first.
    history: Vec<HighlightId>,
    /// id -> coordinates currently holding a record with that id.
    batches: HashMap<HighlightId, HighlightBatch>,
    /// Bumped on every change to `records`; a render is stale when its
    /// generation differs.
    generation: u64,
}

impl HighlightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an explicit highlight, overwriting whatever `coordinate` held.
    ///
    /// The coordinate is not validated; a string that never parses simply
    /// never matches a cell.
    pub fn highlight_cell(&mut self, coordinate: &str, color: &str) -> HighlightId {
        let id = HighlightId::new_v4();
        self.history.push(id);
        self.batches.insert(id, HighlightBatch::new(id, coordinate));
        self.put(coordinate.to_string(), HighlightRecord::explicit(color, id));
        debug!("highlight {coordinate} color={color} id={id}");
        id
    }

    /// Clear every record and the whole history.
    pub fn reset_highlights(&mut self) {
        let changed = !self.records.is_empty();
        self.records.clear();
        self.history.clear();
        self.batches.clear();
        if changed {
            self.generation += 1;
        }
        debug!("reset highlights");
    }

    /// Remove the most recent highlight batch.
    ///
    /// Every coordinate holding the last history id is removed, the explicit
    /// record and everything inherited from it alike. Returns `None` when the
    /// history is empty.
    pub fn undo_last_highlight(&mut self) -> Option<HighlightBatch> {
        let id = self.history.pop()?;
        let batch = self.batches.remove(&id)?;
        for coordinate in &batch.members {
            self.records.shift_remove(coordinate);
        }
        if !batch.members.is_empty() {
            self.generation += 1;
        }
        debug!(
            "undo {id}: removed {} record(s), {} left in history",
            batch.members.len(),
            self.history.len()
        );
        Some(batch)
    }

    /// Merge inherited records collected by a render pass.
    ///
    /// Returns how many were written.
    pub fn merge_inherited(&mut self, pending: IndexMap<String, HighlightRecord>) -> usize {
        let count = pending.len();
        for (coordinate, record) in pending {
            self.put(coordinate, record);
        }
        if count > 0 {
            debug!("merged {count} inherited highlight(s)");
        }
        count
    }

    /// Insert or overwrite one record, moving the coordinate between batches.
    fn put(&mut self, coordinate: String, record: HighlightRecord) {
        if let Some(previous) = self.records.get(&coordinate) {
            if previous.id != record.id {
                if let Some(batch) = self.batches.get_mut(&previous.id) {
                    batch.members.shift_remove(&coordinate);
                }
            }
        }
        if let Some(batch) = self.batches.get_mut(&record.id) {
            batch.members.insert(coordinate.clone());
        }
        self.records.insert(coordinate, record);
        self.generation += 1;
    }

    pub fn get(&self, coordinate: &str) -> Option<&HighlightRecord> {
        self.records.get(coordinate)
    }

    /// Whether `coordinate` already has a registered (non-empty) color.
    pub fn has_color(&self, coordinate: &str) -> bool {
        self.records
            .get(coordinate)
            .is_some_and(HighlightRecord::has_color)
    }

    /// Records in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HighlightRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn records(&self) -> &IndexMap<String, HighlightRecord> {
        &self.records
    }

    pub fn history(&self) -> &[HighlightId] {
        &self.history
    }

    pub fn batch(&self, id: &HighlightId) -> Option<&HighlightBatch> {
        self.batches.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.history.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
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

    fn inherited(store: &HighlightStore, from: &str) -> HighlightRecord {
        HighlightRecord::inherited_from(store.get(from).unwrap())
    }

    #[test]
    fn test_highlight_appends_history_and_record() {
        let mut store = HighlightStore::new();
        let id = store.highlight_cell("5.3", "red");

        assert_eq!(store.history(), &[id]);
        let record = store.get("5.3").unwrap();
        assert_eq!(record.color, "red");
        assert!(record.is_active);
        assert_eq!(record.id, id);
    }

    #[test]
    fn test_overwrite_keeps_scan_position() {
        let mut store = HighlightStore::new();
        store.highlight_cell("2.2", "yellow");
        store.highlight_cell("4.4", "red");
        store.highlight_cell("2.2", "blue");

        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["2.2", "4.4"]);
        assert_eq!(store.get("2.2").unwrap().color, "blue");
        assert_eq!(store.history().len(), 3);
    }

    #[test]
    fn test_undo_removes_whole_batch() {
        let mut store = HighlightStore::new();
        store.highlight_cell("2.2", "yellow");
        let red = store.highlight_cell("4.4", "red");

        let mut pending = IndexMap::new();
        pending.insert("3.3".to_string(), inherited(&store, "4.4"));
        pending.insert("1.0".to_string(), inherited(&store, "2.2"));
        assert_eq!(store.merge_inherited(pending), 2);
        assert_eq!(store.batch(&red).unwrap().inherited_count(), 1);

        let batch = store.undo_last_highlight().unwrap();
        assert_eq!(batch.id, red);
        assert_eq!(batch.origin, "4.4");
        assert!(store.get("4.4").is_none());
        assert!(store.get("3.3").is_none());
        assert!(store.get("2.2").is_some());
        assert!(store.get("1.0").is_some());
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut store = HighlightStore::new();
        let before = store.generation();
        assert!(store.undo_last_highlight().is_none());
        assert_eq!(store.generation(), before);
        assert!(store.is_empty());
    }

    #[test]
    fn test_overwritten_coordinate_leaves_old_batch() {
        let mut store = HighlightStore::new();
        let first = store.highlight_cell("5.3", "red");
        let second = store.highlight_cell("5.3", "blue");

        assert!(store.batch(&first).unwrap().members.is_empty());
        assert_eq!(store.batch(&second).unwrap().members.len(), 1);

        // Undoing the overwrite drops the coordinate entirely; the first
        // request no longer owns it.
        store.undo_last_highlight();
        assert!(store.get("5.3").is_none());
        store.undo_last_highlight();
        assert!(store.is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = HighlightStore::new();
        store.highlight_cell("1.1", "red");
        store.highlight_cell("2.1", "green");

        store.reset_highlights();
        assert!(store.is_empty());
        let generation = store.generation();

        store.reset_highlights();
        assert!(store.is_empty());
        assert_eq!(store.generation(), generation);
    }

    #[test]
    fn test_empty_color_is_not_registered() {
        let mut store = HighlightStore::new();
        store.highlight_cell("3.3", "");
        assert!(store.get("3.3").is_some());
        assert!(!store.has_color("3.3"));
    }
}
