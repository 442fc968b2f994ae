use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier shared by an explicit highlight and every highlight inherited
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightId(Uuid);

impl HighlightId {
    /// A fresh random identifier.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HighlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Highlight stored for one coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRecord {
    /// Any CSS color, stored verbatim.
    pub color: String,
    /// `true` for an explicitly requested highlight, `false` for one
    /// synthesized by inheritance.
    pub is_active: bool,
    pub id: HighlightId,
}

impl HighlightRecord {
    pub fn explicit(color: impl Into<String>, id: HighlightId) -> Self {
        Self {
            color: color.into(),
            is_active: true,
            id,
        }
    }

    /// An inactive copy of `source`, used when a cell inherits its color.
    pub fn inherited_from(source: &HighlightRecord) -> Self {
        Self {
            color: source.color.clone(),
            is_active: false,
            id: source.id,
        }
    }

    /// Whether this record counts as a registered color. An empty color
    /// string does not.
    pub fn has_color(&self) -> bool {
        !self.color.is_empty()
    }
}

/// An explicit highlight together with every coordinate currently holding a
/// record with its id. Undo removes a whole batch at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightBatch {
    pub id: HighlightId,
    /// Coordinate passed to the explicit highlight request.
    pub origin: String,
    /// Coordinates holding a record with this id, in the order they joined.
    pub members: IndexSet<String>,
}

impl HighlightBatch {
    pub(crate) fn new(id: HighlightId, origin: &str) -> Self {
        Self {
            id,
            origin: origin.to_string(),
            members: IndexSet::new(),
        }
    }

    /// Number of inherited members (everything except the origin).
    pub fn inherited_count(&self) -> usize {
        self.members
            .iter()
            .filter(|coord| coord.as_str() != self.origin)
            .count()
    }
}
