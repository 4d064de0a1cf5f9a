//! Flag to content mappings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Association from a flag's variations to content entry ids.
///
/// Keys are either a stringified variation index (`"0"`, `"1"`, ...) or a
/// variation name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagMapping {
    pub flag_key: String,
    #[serde(default)]
    pub content_mapping: HashMap<String, String>,
}

impl FlagMapping {
    pub fn new(flag_key: impl Into<String>) -> Self {
        Self {
            flag_key: flag_key.into(),
            content_mapping: HashMap::new(),
        }
    }

    /// Map variation `index` to `entry_id`.
    pub fn with_index(mut self, index: usize, entry_id: impl Into<String>) -> Self {
        self.content_mapping
            .insert(index.to_string(), entry_id.into());
        self
    }

    /// Map the variation called `name` to `entry_id`.
    pub fn with_name(mut self, name: impl Into<String>, entry_id: impl Into<String>) -> Self {
        self.content_mapping.insert(name.into(), entry_id.into());
        self
    }

    /// Map a variation by both index and name.
    pub fn with_variation(
        self,
        index: usize,
        name: impl Into<String>,
        entry_id: impl Into<String>,
    ) -> Self {
        let entry_id = entry_id.into();
        self.with_index(index, entry_id.clone()).with_name(name, entry_id)
    }

    /// Entry id for a variation.
    ///
    /// The index is tried first; the name is only consulted when the index
    /// has no entry. Empty ids count as unmapped.
    pub fn entry_id_for(&self, index: usize, name: Option<&str>) -> Option<&str> {
        let lookup = |key: &str| {
            self.content_mapping
                .get(key)
                .map(String::as_str)
                .filter(|id| !id.is_empty())
        };

        lookup(&index.to_string()).or_else(|| name.and_then(lookup))
    }

    /// All non-empty entry ids referenced by this mapping.
    pub fn entry_ids(&self) -> impl Iterator<Item = &str> {
        self.content_mapping
            .values()
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}
