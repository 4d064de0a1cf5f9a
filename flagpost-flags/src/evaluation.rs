//! Evaluation results

use crate::flag::{Flag, VariationValue};
use serde::{Deserialize, Serialize};

/// Variation name reported for unknown flags.
pub const FALLBACK_VARIATION_NAME: &str = "default";

/// Why an evaluation produced its variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationReason {
    /// Flag key not in the catalog; caller default served
    Fallback,
    /// Assigned by hashing the context key
    Bucketed,
    /// Assigned by a recorded override
    Forced,
    /// Built for a specific variation on request
    Explicit,
}

/// The variation assigned to a context for one flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagEvaluation {
    pub flag_key: String,
    pub variation_index: usize,
    pub value: VariationValue,
    pub variation_name: String,
    pub reason: EvaluationReason,
}

impl FlagEvaluation {
    /// Evaluation served for a flag that does not exist.
    pub fn fallback(flag_key: impl Into<String>, default_value: VariationValue) -> Self {
        Self {
            flag_key: flag_key.into(),
            variation_index: 0,
            value: default_value,
            variation_name: FALLBACK_VARIATION_NAME.to_string(),
            reason: EvaluationReason::Fallback,
        }
    }

    /// Evaluation of `flag` at `index`. `None` when the index is out of range.
    pub(crate) fn for_variation(
        flag: &Flag,
        index: usize,
        reason: EvaluationReason,
    ) -> Option<Self> {
        let variation = flag.variation(index)?;
        Some(Self {
            flag_key: flag.key.clone(),
            variation_index: index,
            value: variation.value.clone(),
            variation_name: variation.name.clone(),
            reason,
        })
    }

    pub fn is_fallback(&self) -> bool {
        self.reason == EvaluationReason::Fallback
    }
}
