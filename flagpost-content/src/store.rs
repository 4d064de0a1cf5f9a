//! Content store trait and the in-memory catalog store.

use crate::catalog::ContentCatalog;
use crate::entry::ContentEntry;
use crate::mapping::FlagMapping;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Read access to content entries and flag mappings.
///
/// Lookups that find nothing return `None` or an empty list; a store has no
/// error path of its own.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch a single entry by id.
    async fn entry(&self, id: &str) -> Option<ContentEntry>;

    /// Fetch all entries, in catalog order.
    async fn entries(&self) -> Vec<ContentEntry>;

    /// Fetch the mapping for a flag.
    async fn flag_mapping(&self, flag_key: &str) -> Option<FlagMapping>;

    /// Fetch every mapping, in catalog order.
    async fn flag_mappings(&self) -> Vec<FlagMapping>;
}

/// Artificial delays applied by [`InMemoryStore`] to mimic a remote CMS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub entry: Duration,
    pub entries: Duration,
    pub mapping: Duration,
    pub mappings: Duration,
}

impl SimulatedLatency {
    /// No delays.
    pub fn none() -> Self {
        Self::default()
    }

    /// Delays of a typical hosted delivery API: 100 ms per entry, 150 ms for a
    /// listing, 50 ms per mapping and 100 ms for all mappings.
    pub fn remote() -> Self {
        Self {
            entry: Duration::from_millis(100),
            entries: Duration::from_millis(150),
            mapping: Duration::from_millis(50),
            mappings: Duration::from_millis(100),
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Store serving a static [`ContentCatalog`].
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    catalog: Arc<ContentCatalog>,
    latency: SimulatedLatency,
}

impl InMemoryStore {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            latency: SimulatedLatency::none(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn latency(&self) -> SimulatedLatency {
        self.latency
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn entry(&self, id: &str) -> Option<ContentEntry> {
        pause(self.latency.entry).await;
        self.catalog.entry(id).cloned()
    }

    async fn entries(&self) -> Vec<ContentEntry> {
        pause(self.latency.entries).await;
        self.catalog.entries().to_vec()
    }

    async fn flag_mapping(&self, flag_key: &str) -> Option<FlagMapping> {
        pause(self.latency.mapping).await;
        self.catalog.mapping(flag_key).cloned()
    }

    async fn flag_mappings(&self) -> Vec<FlagMapping> {
        pause(self.latency.mappings).await;
        self.catalog.mappings().to_vec()
    }
}
