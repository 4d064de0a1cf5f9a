//! Content Resolver
//!
//! Turns a resolved flag variation into the content entry bound to it.
//!
//! Every miss is a defined empty result rather than an error:
//!
//! | Situation                          | `entry` | `entry_id` | `mapping` |
//! |------------------------------------|---------|------------|-----------|
//! | No mapping for the flag            | `None`  | `None`     | `None`    |
//! | Variation not mapped               | `None`  | `None`     | `Some`    |
//! | Mapped id missing from the catalog | `None`  | `Some`     | `Some`    |
//! | Resolved                           | `Some`  | `Some`     | `Some`    |

use crate::entry::ContentEntry;
use crate::mapping::FlagMapping;
use crate::store::{ContentStore, InMemoryStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of resolving a flag variation to content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedContent {
    pub entry: Option<ContentEntry>,
    pub entry_id: Option<String>,
    pub mapping: Option<FlagMapping>,
}

impl ResolvedContent {
    /// True when an entry was found.
    pub fn is_resolved(&self) -> bool {
        self.entry.is_some()
    }
}

/// Resolves flag variations to content through a [`ContentStore`].
#[derive(Clone)]
pub struct ContentResolver {
    store: Arc<dyn ContentStore>,
}

impl std::fmt::Debug for ContentResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentResolver").finish_non_exhaustive()
    }
}

impl ContentResolver {
    pub fn new(store: impl ContentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Resolver over a static catalog with no simulated latency.
    pub fn in_memory(catalog: crate::ContentCatalog) -> Self {
        Self::new(InMemoryStore::new(catalog))
    }

    /// Resolve the entry bound to a flag variation.
    ///
    /// The stringified `variation_index` is looked up first; `variation_name`
    /// is only tried when the index is unmapped. With `preview` set the entry
    /// title is marked as a preview on a copy.
    pub async fn resolve(
        &self,
        flag_key: &str,
        variation_index: usize,
        variation_name: Option<&str>,
        preview: bool,
    ) -> ResolvedContent {
        let Some(mapping) = self.store.flag_mapping(flag_key).await else {
            debug!(flag = flag_key, "No content mapping for flag");
            return ResolvedContent::default();
        };

        let Some(entry_id) = mapping
            .entry_id_for(variation_index, variation_name)
            .map(str::to_owned)
        else {
            debug!(
                flag = flag_key,
                variation = variation_index,
                name = ?variation_name,
                "Variation has no mapped content"
            );
            return ResolvedContent {
                entry: None,
                entry_id: None,
                mapping: Some(mapping),
            };
        };

        let entry = self.entry(&entry_id, preview).await;
        if entry.is_none() {
            warn!(flag = flag_key, entry = %entry_id, "Mapped content entry not found");
        } else {
            debug!(flag = flag_key, entry = %entry_id, preview, "Content resolved");
        }

        ResolvedContent {
            entry,
            entry_id: Some(entry_id),
            mapping: Some(mapping),
        }
    }

    /// Fetch one entry, as a preview copy when `preview` is set.
    pub async fn entry(&self, id: &str, preview: bool) -> Option<ContentEntry> {
        self.store
            .entry(id)
            .await
            .map(|entry| entry.rendered(preview))
    }

    /// List entries, optionally restricted to one content type.
    pub async fn entries(&self, content_type: Option<&str>, preview: bool) -> Vec<ContentEntry> {
        self.store
            .entries()
            .await
            .into_iter()
            .filter(|entry| content_type.is_none_or(|ty| entry.content_type == ty))
            .map(|entry| entry.rendered(preview))
            .collect()
    }

    pub async fn flag_mapping(&self, flag_key: &str) -> Option<FlagMapping> {
        self.store.flag_mapping(flag_key).await
    }

    pub async fn flag_mappings(&self) -> Vec<FlagMapping> {
        self.store.flag_mappings().await
    }
}
