//! Forced variation table
//!
//! Session-scoped overrides keyed by flag. This is the only shared mutable
//! state in the evaluator; every entry is a single key to index write.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared table of forced variation indexes.
///
/// Cloning shares the underlying table.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    forced: Arc<RwLock<HashMap<String, usize>>>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `index` for `flag_key`, replacing any previous override.
    pub fn set(&self, flag_key: impl Into<String>, index: usize) {
        self.forced.write().insert(flag_key.into(), index);
    }

    pub fn get(&self, flag_key: &str) -> Option<usize> {
        self.forced.read().get(flag_key).copied()
    }

    /// Remove the override for `flag_key`, returning the index it held.
    pub fn remove(&self, flag_key: &str) -> Option<usize> {
        self.forced.write().remove(flag_key)
    }

    pub fn clear(&self) {
        self.forced.write().clear();
    }

    pub fn len(&self) -> usize {
        self.forced.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.forced.read().is_empty()
    }
}
