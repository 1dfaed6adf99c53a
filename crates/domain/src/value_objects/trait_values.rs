//! Per-character storage for trait values, indexed by [`TraitId`].

use serde::{Deserialize, Serialize};

use crate::ids::TraitId;

/// Dense value storage; slot `i` belongs to the schema trait with index `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitValues(Vec<i32>);

impl TraitValues {
    pub(crate) fn from_defaults(defaults: impl IntoIterator<Item = i32>) -> Self {
        Self(defaults.into_iter().collect())
    }

    /// Value of `id`. Ids come from the same schema, so the slot exists;
    /// a foreign id reads as 0 rather than panicking.
    pub fn get(&self, id: TraitId) -> i32 {
        self.0.get(id.index()).copied().unwrap_or_default()
    }

    /// Returns `false`, writing nothing, when `id` has no slot here.
    pub(crate) fn set(&mut self, id: TraitId, value: i32) -> bool {
        match self.0.get_mut(id.index()) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}
