//! Flag Evaluator
//!
//! Maps a `(flag key, context)` pair to a single [`FlagEvaluation`].
//!
//! Resolution order for a known flag:
//!
//! 1. A forced variation recorded with [`FlagEvaluator::force_variation`]
//! 2. Hash bucketing of `"{context.key}-{flag_key}"`
//!
//! Unknown flags are not an error; they yield a fallback evaluation carrying
//! the caller's default value.

use crate::bucket;
use crate::catalog::FlagCatalog;
use crate::context::UserContext;
use crate::evaluation::{EvaluationReason, FlagEvaluation};
use crate::flag::{Flag, VariationValue};
use crate::overrides::OverrideTable;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Deterministic flag evaluator over a static catalog.
#[derive(Debug, Clone)]
pub struct FlagEvaluator {
    catalog: Arc<FlagCatalog>,
    overrides: OverrideTable,
}

impl FlagEvaluator {
    pub fn new(catalog: FlagCatalog) -> Self {
        Self::with_overrides(catalog, OverrideTable::new())
    }

    /// Create an evaluator sharing an existing override table.
    pub fn with_overrides(catalog: FlagCatalog, overrides: OverrideTable) -> Self {
        Self {
            catalog: Arc::new(catalog),
            overrides,
        }
    }

    /// Evaluate `flag_key` for `context`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagpost_flags::*;
    ///
    /// let catalog = FlagCatalog::new(vec![Flag::boolean("new-ui", "New UI")]).unwrap();
    /// let evaluator = FlagEvaluator::new(catalog);
    /// let context = UserContext::new("user-42");
    ///
    /// let first = evaluator.evaluate("new-ui", &context, false);
    /// let second = evaluator.evaluate("new-ui", &context, false);
    /// assert_eq!(first.variation_index, second.variation_index);
    ///
    /// let missing = evaluator.evaluate("unknown", &context, "fallback");
    /// assert_eq!(missing.variation_name, "default");
    /// ```
    pub fn evaluate(
        &self,
        flag_key: &str,
        context: &UserContext,
        default_value: impl Into<VariationValue>,
    ) -> FlagEvaluation {
        let Some(flag) = self.catalog.get(flag_key) else {
            debug!(flag = flag_key, "Unknown flag, serving fallback");
            return FlagEvaluation::fallback(flag_key, default_value.into());
        };

        let evaluation = self.evaluate_known(flag, context);
        debug!(
            flag = flag_key,
            context = %context.key,
            variation = evaluation.variation_index,
            reason = ?evaluation.reason,
            "Flag evaluated"
        );
        evaluation
    }

    /// Evaluate every catalog flag for `context`, keyed by flag key.
    pub fn evaluate_all(&self, context: &UserContext) -> BTreeMap<String, FlagEvaluation> {
        self.catalog
            .iter()
            .map(|flag| (flag.key.clone(), self.evaluate_known(flag, context)))
            .collect()
    }

    /// Build the evaluation for a specific variation, bypassing bucketing and
    /// overrides. `None` for an unknown flag or out-of-range index.
    pub fn variation_at(&self, flag_key: &str, index: usize) -> Option<FlagEvaluation> {
        let flag = self.catalog.get(flag_key)?;
        FlagEvaluation::for_variation(flag, index, EvaluationReason::Explicit)
    }

    pub fn all_flags(&self) -> &[Flag] {
        self.catalog.flags()
    }

    pub fn flag(&self, key: &str) -> Option<&Flag> {
        self.catalog.get(key)
    }

    pub fn catalog(&self) -> &FlagCatalog {
        &self.catalog
    }

    /// Force `flag_key` to serve variation `index` until cleared.
    ///
    /// Ignored for unknown flags and out-of-range indexes. Returns whether the
    /// override was recorded.
    pub fn force_variation(&self, flag_key: &str, index: usize) -> bool {
        match self.catalog.get(flag_key) {
            Some(flag) if index < flag.len() => {
                debug!(flag = flag_key, variation = index, "Forcing variation");
                self.overrides.set(flag_key, index);
                true
            }
            Some(flag) => {
                warn!(
                    flag = flag_key,
                    variation = index,
                    variations = flag.len(),
                    "Ignoring out-of-range forced variation"
                );
                false
            }
            None => {
                warn!(flag = flag_key, "Ignoring forced variation for unknown flag");
                false
            }
        }
    }

    pub fn forced_variation(&self, flag_key: &str) -> Option<usize> {
        self.overrides.get(flag_key)
    }

    pub fn clear_forced_variation(&self, flag_key: &str) -> Option<usize> {
        self.overrides.remove(flag_key)
    }

    pub fn clear_forced_variations(&self) {
        self.overrides.clear();
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    fn evaluate_known(&self, flag: &Flag, context: &UserContext) -> FlagEvaluation {
        if let Some(evaluation) = self
            .overrides
            .get(&flag.key)
            .and_then(|index| FlagEvaluation::for_variation(flag, index, EvaluationReason::Forced))
        {
            return evaluation;
        }

        let index = bucket::bucket(&context.key, &flag.key, flag.len());
        FlagEvaluation::for_variation(flag, index, EvaluationReason::Bucketed)
            .unwrap_or_else(|| FlagEvaluation::fallback(&flag.key, VariationValue::Boolean(false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::Variation;

    fn evaluator() -> FlagEvaluator {
        let catalog = FlagCatalog::new(vec![
            Flag::boolean("hero-banner-variant", "Hero Banner Variant"),
            Flag::new(
                "promo-campaign",
                "Promotional Campaign",
                vec![
                    Variation::string("default", "default"),
                    Variation::string("summer-sale", "summer"),
                    Variation::string("holiday-special", "holiday"),
                ],
            ),
        ])
        .unwrap();
        FlagEvaluator::new(catalog)
    }

    #[test]
    fn test_bucketed_evaluation() {
        let evaluator = evaluator();
        let context = UserContext::new("user-42");

        // "user-42-hero-banner-variant" hashes to 1764273034
        let evaluation = evaluator.evaluate("hero-banner-variant", &context, false);
        assert_eq!(evaluation.variation_index, 0);
        assert_eq!(evaluation.variation_name, "control");
        assert_eq!(evaluation.value.as_bool(), Some(false));
        assert_eq!(evaluation.reason, EvaluationReason::Bucketed);

        let promo = evaluator.evaluate("promo-campaign", &context, "none");
        assert_eq!(promo.variation_index, 2);
        assert_eq!(promo.variation_name, "holiday-special");
    }

    #[test]
    fn test_unknown_flag_fallback() {
        let evaluation = evaluator().evaluate("nonexistent-flag", &UserContext::new("u"), "X");

        assert_eq!(evaluation.flag_key, "nonexistent-flag");
        assert_eq!(evaluation.variation_index, 0);
        assert_eq!(evaluation.value.as_string(), Some("X"));
        assert_eq!(evaluation.variation_name, "default");
        assert!(evaluation.is_fallback());
    }

    #[test]
    fn test_empty_context_key_hashes_as_empty_string() {
        let evaluator = evaluator();
        let evaluation = evaluator.evaluate("promo-campaign", &UserContext::default(), "none");

        assert_eq!(
            evaluation.variation_index,
            bucket::bucket("", "promo-campaign", 3)
        );
    }

    #[test]
    fn test_forced_variation_short_circuits() {
        let evaluator = evaluator();
        let context = UserContext::new("user-42");

        assert!(evaluator.force_variation("hero-banner-variant", 1));
        let evaluation = evaluator.evaluate("hero-banner-variant", &context, false);
        assert_eq!(evaluation.variation_index, 1);
        assert_eq!(evaluation.reason, EvaluationReason::Forced);
        assert_eq!(evaluator.forced_variation("hero-banner-variant"), Some(1));

        assert_eq!(evaluator.clear_forced_variation("hero-banner-variant"), Some(1));
        let evaluation = evaluator.evaluate("hero-banner-variant", &context, false);
        assert_eq!(evaluation.variation_index, 0);
        assert_eq!(evaluation.reason, EvaluationReason::Bucketed);
    }

    #[test]
    fn test_forced_variation_rejected() {
        let evaluator = evaluator();

        assert!(!evaluator.force_variation("hero-banner-variant", 2));
        assert!(!evaluator.force_variation("unknown", 0));
        assert!(evaluator.overrides().is_empty());
    }

    #[test]
    fn test_evaluate_all_applies_overrides() {
        let evaluator = evaluator();
        evaluator.force_variation("promo-campaign", 1);

        let all = evaluator.evaluate_all(&UserContext::new("user-42"));
        assert_eq!(all.len(), 2);
        assert_eq!(all["promo-campaign"].variation_name, "summer-sale");
        assert_eq!(all["hero-banner-variant"].reason, EvaluationReason::Bucketed);
    }

    #[test]
    fn test_variation_at() {
        let evaluator = evaluator();

        let evaluation = evaluator.variation_at("promo-campaign", 1).unwrap();
        assert_eq!(evaluation.variation_name, "summer-sale");
        assert_eq!(evaluation.reason, EvaluationReason::Explicit);
        assert!(evaluator.variation_at("promo-campaign", 3).is_none());
        assert!(evaluator.variation_at("unknown", 0).is_none());
    }
}
