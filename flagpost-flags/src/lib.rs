//! Flag Evaluation for Flagpost
//!
//! Deterministic feature-flag evaluation over a static catalog.
//!
//! # Features
//!
//! - **Flag Catalog** - Validated, read-only flag definitions
//! - **Bucketing** - Repeatable hash-based variation assignment
//! - **Overrides** - Session-scoped forced variations
//! - **Fallbacks** - Unknown flags serve the caller's default, never an error
//!
//! # Quick Start
//!
//! ```
//! use flagpost_flags::*;
//!
//! let catalog = FlagCatalog::new(vec![
//!     Flag::new(
//!         "promo-campaign",
//!         "Promotional Campaign",
//!         vec![
//!             Variation::string("default", "default"),
//!             Variation::string("summer-sale", "summer"),
//!         ],
//!     ),
//! ])
//! .unwrap();
//!
//! let evaluator = FlagEvaluator::new(catalog);
//! let context = UserContext::new("user-123").with_country("US");
//!
//! let evaluation = evaluator.evaluate("promo-campaign", &context, "default");
//! assert!(evaluation.variation_index < 2);
//! ```
//!
//! # Overrides
//!
//! ```
//! use flagpost_flags::*;
//!
//! let catalog = FlagCatalog::new(vec![Flag::boolean("hero", "Hero")]).unwrap();
//! let evaluator = FlagEvaluator::new(catalog);
//!
//! evaluator.force_variation("hero", 1);
//! let evaluation = evaluator.evaluate("hero", &UserContext::new("anyone"), false);
//! assert_eq!(evaluation.reason, EvaluationReason::Forced);
//! ```

pub mod bucket;
pub mod catalog;
pub mod context;
pub mod error;
pub mod evaluation;
pub mod evaluator;
pub mod flag;
pub mod overrides;

pub use catalog::FlagCatalog;
pub use context::UserContext;
pub use error::{FlagError, Result};
pub use evaluation::{EvaluationReason, FALLBACK_VARIATION_NAME, FlagEvaluation};
pub use evaluator::FlagEvaluator;
pub use flag::{Flag, Variation, VariationValue};
pub use overrides::OverrideTable;
