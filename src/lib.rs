//! # Flagpost
//!
//! Feature-flag driven content selection: evaluate a flag for a user context,
//! then resolve the variation it lands on to a content entry.
//!
//! ## Features
//!
//! - **Deterministic Bucketing** - The same context always lands on the same variation
//! - **Overrides** - Force a variation for a flag during a session
//! - **Content Mappings** - Bind variations to entries by index or name
//! - **Preview Mode** - Marked copies of content, originals untouched
//! - **Catalog Files** - Load flags, entries and mappings from JSON or TOML
//! - **Settings** - Files, `.env` and `FLAGPOST_*` environment variables
//!
//! ## Quick Start
//!
//! ```
//! use flagpost::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let pipeline = Pipeline::demo().unwrap();
//! let context = UserContext::new("user-42");
//!
//! let result = pipeline
//!     .evaluate_and_resolve("hero-banner-variant", &context, None)
//!     .await;
//!
//! assert_eq!(result.evaluation.variation_name, "control");
//! assert_eq!(
//!     result.content.entry.unwrap().title(),
//!     Some("Scale feature management with confidence")
//! );
//! # });
//! ```
//!
//! ## From Settings
//!
//! ```no_run
//! use flagpost::prelude::*;
//! use flagpost::logging::LogConfig;
//!
//! # fn main() -> flagpost::Result<()> {
//! let settings = Settings::builder().load_dotenv(None).build()?;
//! LogConfig::from_settings(&settings).init()?;
//! let _pipeline = Pipeline::from_settings(&settings)?;
//! # Ok(())
//! # }
//! ```

pub mod catalog_file;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod seed;

pub use catalog_file::CatalogFile;
pub use error::{Error, Result};
pub use pipeline::{FlagContent, Pipeline};

pub use flagpost_config as config;
pub use flagpost_content as content;
pub use flagpost_flags as flags;

/// Common imports.
pub mod prelude {
    pub use crate::catalog_file::CatalogFile;
    pub use crate::pipeline::{FlagContent, Pipeline};
    pub use flagpost_config::{Settings, SettingsBuilder};
    pub use flagpost_content::{
        ContentCatalog, ContentEntry, ContentResolver, ContentStore, FlagMapping,
        InMemoryStore, ResolvedContent, SimulatedLatency,
    };
    pub use flagpost_flags::{
        EvaluationReason, Flag, FlagCatalog, FlagEvaluation, FlagEvaluator, UserContext,
        Variation, VariationValue,
    };
}
