//! Content Resolution for Flagpost
//!
//! Binds flag variations to content entries and resolves them, optionally as
//! preview copies.
//!
//! # Quick Start
//!
//! ```
//! use flagpost_content::*;
//!
//! # tokio_test::block_on(async {
//! let catalog = ContentCatalog::new(
//!     vec![
//!         ContentEntry::new("hero-control").with_title("Scale with confidence"),
//!         ContentEntry::new("hero-treatment").with_title("Ship faster"),
//!     ],
//!     vec![
//!         FlagMapping::new("hero-banner-variant")
//!             .with_variation(0, "control", "hero-control")
//!             .with_variation(1, "treatment", "hero-treatment"),
//!     ],
//! )
//! .unwrap();
//!
//! let resolver = ContentResolver::in_memory(catalog);
//! let resolved = resolver
//!     .resolve("hero-banner-variant", 1, Some("treatment"), true)
//!     .await;
//!
//! assert_eq!(
//!     resolved.entry.unwrap().title(),
//!     Some("[PREVIEW] Ship faster")
//! );
//! # });
//! ```

pub mod catalog;
pub mod entry;
pub mod error;
pub mod mapping;
pub mod resolver;
pub mod store;

pub use catalog::ContentCatalog;
pub use entry::{Asset, ContentEntry, EntryFields, PREVIEW_PREFIX};
pub use error::{ContentError, Result};
pub use mapping::FlagMapping;
pub use resolver::{ContentResolver, ResolvedContent};
pub use store::{ContentStore, InMemoryStore, SimulatedLatency};
