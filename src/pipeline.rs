//! Evaluation to content pipeline
//!
//! Joins a [`FlagEvaluator`] and a [`ContentResolver`]: a flag is evaluated
//! for a context, and the resulting variation is resolved to its content.

use crate::catalog_file::CatalogFile;
use crate::error::Result;
use crate::seed;
use flagpost_config::Settings;
use flagpost_content::{ContentResolver, InMemoryStore, ResolvedContent, SimulatedLatency};
use flagpost_flags::{FlagEvaluation, FlagEvaluator, UserContext, VariationValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// An evaluation together with the content it resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagContent {
    pub evaluation: FlagEvaluation,
    pub content: ResolvedContent,
}

/// Flag evaluation and content resolution, wired together.
#[derive(Debug, Clone)]
pub struct Pipeline {
    evaluator: FlagEvaluator,
    resolver: ContentResolver,
    preview: bool,
}

impl Pipeline {
    pub fn new(evaluator: FlagEvaluator, resolver: ContentResolver) -> Self {
        Self {
            evaluator,
            resolver,
            preview: false,
        }
    }

    /// Pipeline over the built-in demo catalogs.
    pub fn demo() -> Result<Self> {
        let evaluator = FlagEvaluator::new(seed::demo_flag_catalog()?);
        let resolver = ContentResolver::in_memory(seed::demo_content_catalog()?);
        Ok(Self::new(evaluator, resolver))
    }

    /// Pipeline configured from settings.
    ///
    /// Uses `catalog_path` when set, the demo catalogs otherwise.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let catalog = match &settings.catalog_path {
            Some(path) => CatalogFile::load(path)?,
            None => CatalogFile::demo(),
        };
        let (flags, content) = catalog.into_catalogs()?;

        let latency = if settings.simulate_latency {
            SimulatedLatency::remote()
        } else {
            SimulatedLatency::none()
        };
        let store = InMemoryStore::new(content).with_latency(latency);

        info!(
            flags = flags.len(),
            preview = settings.preview,
            simulate_latency = settings.simulate_latency,
            "Pipeline ready"
        );

        Ok(Self::new(FlagEvaluator::new(flags), ContentResolver::new(store))
            .with_preview(settings.preview))
    }

    /// Set the preview mode used when a call does not choose one.
    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn preview(&self) -> bool {
        self.preview
    }

    pub fn evaluator(&self) -> &FlagEvaluator {
        &self.evaluator
    }

    pub fn resolver(&self) -> &ContentResolver {
        &self.resolver
    }

    /// Evaluate a flag, falling back to `false` for unknown keys.
    pub fn evaluate(&self, flag_key: &str, context: &UserContext) -> FlagEvaluation {
        self.evaluator
            .evaluate(flag_key, context, VariationValue::Boolean(false))
    }

    /// Resolve the content bound to an evaluation.
    ///
    /// `preview` of `None` uses the pipeline's configured preview mode.
    pub async fn resolve(
        &self,
        evaluation: &FlagEvaluation,
        preview: Option<bool>,
    ) -> ResolvedContent {
        self.resolver
            .resolve(
                &evaluation.flag_key,
                evaluation.variation_index,
                Some(&evaluation.variation_name),
                preview.unwrap_or(self.preview),
            )
            .await
    }

    /// Evaluate `flag_key` for `context` and resolve its content.
    pub async fn evaluate_and_resolve(
        &self,
        flag_key: &str,
        context: &UserContext,
        preview: Option<bool>,
    ) -> FlagContent {
        let evaluation = self.evaluate(flag_key, context);
        let content = self.resolve(&evaluation, preview).await;

        debug!(
            flag = flag_key,
            variation = %evaluation.variation_name,
            entry = ?content.entry_id,
            "Flag content resolved"
        );
        FlagContent {
            evaluation,
            content,
        }
    }

    /// Evaluate and resolve every catalog flag for `context`, in key order.
    pub async fn evaluate_and_resolve_all(
        &self,
        context: &UserContext,
        preview: Option<bool>,
    ) -> Vec<FlagContent> {
        let mut results = Vec::new();
        for (_, evaluation) in self.evaluator.evaluate_all(context) {
            let content = self.resolve(&evaluation, preview).await;
            results.push(FlagContent {
                evaluation,
                content,
            });
        }
        results
    }

    /// Content for every variation of a flag, in variation order.
    ///
    /// Evaluations are built per variation without touching the override
    /// table. `None` for an unknown flag.
    pub async fn compare_variations(
        &self,
        flag_key: &str,
        preview: Option<bool>,
    ) -> Option<Vec<FlagContent>> {
        let count = self.evaluator.flag(flag_key)?.len();

        let mut results = Vec::with_capacity(count);
        for index in 0..count {
            let evaluation = self.evaluator.variation_at(flag_key, index)?;
            let content = self.resolve(&evaluation, preview).await;
            results.push(FlagContent {
                evaluation,
                content,
            });
        }
        Some(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagpost_flags::EvaluationReason;

    fn is_preview(result: &FlagContent) -> bool {
        result
            .content
            .entry
            .as_ref()
            .and_then(|entry| entry.title())
            .is_some_and(|title| title.starts_with("[PREVIEW] "))
    }

    #[tokio::test]
    async fn test_evaluate_and_resolve() {
        let pipeline = Pipeline::demo().unwrap();
        let context = UserContext::new("user-42");

        let result = pipeline
            .evaluate_and_resolve(seed::PROMO_CAMPAIGN, &context, None)
            .await;

        assert_eq!(result.evaluation.variation_name, "holiday-special");
        assert_eq!(result.content.entry_id.as_deref(), Some("promo-holiday"));
        assert!(!is_preview(&result));
    }

    #[tokio::test]
    async fn test_configured_preview_applies_by_default() {
        let pipeline = Pipeline::demo().unwrap().with_preview(true);
        let context = UserContext::new("user-42");

        let result = pipeline
            .evaluate_and_resolve(seed::HERO_BANNER_VARIANT, &context, None)
            .await;
        assert!(is_preview(&result));

        let explicit = pipeline
            .evaluate_and_resolve(seed::HERO_BANNER_VARIANT, &context, Some(false))
            .await;
        assert!(!is_preview(&explicit));

        let all = pipeline.evaluate_and_resolve_all(&context, None).await;
        assert!(all.iter().all(is_preview));
    }

    #[tokio::test]
    async fn test_unknown_flag_resolves_empty() {
        let pipeline = Pipeline::demo().unwrap();

        let result = pipeline
            .evaluate_and_resolve("no-such-flag", &UserContext::new("user-42"), None)
            .await;

        assert!(result.evaluation.is_fallback());
        assert_eq!(result.content, ResolvedContent::default());
    }

    #[tokio::test]
    async fn test_compare_variations() {
        let pipeline = Pipeline::demo().unwrap();

        let results = pipeline
            .compare_variations(seed::ONBOARDING_FLOW, Some(true))
            .await
            .unwrap();

        let ids: Vec<_> = results
            .iter()
            .map(|r| r.content.entry_id.as_deref().unwrap())
            .collect();
        assert_eq!(
            ids,
            ["bank-hero-standard", "bank-hero-premium", "devops-hero-advanced"]
        );
        assert!(
            results
                .iter()
                .all(|r| r.evaluation.reason == EvaluationReason::Explicit)
        );
        assert!(results.iter().all(is_preview));
        assert!(pipeline.evaluator().overrides().is_empty());
        assert!(
            pipeline
                .compare_variations("no-such-flag", None)
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_evaluate_and_resolve_all() {
        let pipeline = Pipeline::demo().unwrap();

        let results = pipeline
            .evaluate_and_resolve_all(&UserContext::new("user-1"), None)
            .await;

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.content.is_resolved()));
        assert_eq!(results[0].evaluation.flag_key, seed::HERO_BANNER_VARIANT);
    }

    #[tokio::test]
    async fn test_flag_content_serializes_camel_case() {
        let pipeline = Pipeline::demo().unwrap();

        let result = pipeline
            .evaluate_and_resolve(seed::HERO_BANNER_VARIANT, &UserContext::new("user-42"), None)
            .await;
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["evaluation"]["variationName"], "control");
        assert_eq!(json["content"]["entryId"], "hero-control");
    }
}
