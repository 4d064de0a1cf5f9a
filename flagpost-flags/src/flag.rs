//! Flag Definitions
//!
//! Defines flags, their variations, and the validation applied when a flag
//! enters a catalog.

use crate::error::{FlagError, Result};
use serde::{Deserialize, Serialize};

/// A named toggle with an ordered list of variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flag {
    /// Unique flag key
    pub key: String,

    /// Human readable label
    pub name: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// All available variations, in index order
    pub variations: Vec<Variation>,

    /// Index of the variation served when nothing else applies
    #[serde(default)]
    pub default_variation: usize,
}

impl Flag {
    /// Create a flag whose default is the first variation.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagpost_flags::{Flag, Variation};
    ///
    /// let flag = Flag::new(
    ///     "hero-banner-variant",
    ///     "Hero Banner Variant",
    ///     vec![Variation::boolean("control", false), Variation::boolean("treatment", true)],
    /// );
    /// assert_eq!(flag.variations.len(), 2);
    /// ```
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        variations: Vec<Variation>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: None,
            variations,
            default_variation: 0,
        }
    }

    /// Create a two-way boolean flag with `control` (false) and `treatment` (true).
    pub fn boolean(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(
            key,
            name,
            vec![
                Variation::boolean("control", false),
                Variation::boolean("treatment", true),
            ],
        )
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default variation index
    pub fn with_default_variation(mut self, index: usize) -> Self {
        self.default_variation = index;
        self
    }

    /// Variation at `index`, if in range.
    pub fn variation(&self, index: usize) -> Option<&Variation> {
        self.variations.get(index)
    }

    /// Index of the variation called `name`.
    pub fn variation_index(&self, name: &str) -> Option<usize> {
        self.variations.iter().position(|v| v.name == name)
    }

    /// Number of variations.
    pub fn len(&self) -> usize {
        self.variations.len()
    }

    /// True when the flag has no variations (never the case once validated).
    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// Check the flag's structural invariants.
    pub fn validate(&self) -> Result<()> {
        if self.variations.is_empty() {
            return Err(FlagError::NoVariations(self.key.clone()));
        }

        if self.default_variation >= self.variations.len() {
            return Err(FlagError::DefaultOutOfRange {
                key: self.key.clone(),
                index: self.default_variation,
                len: self.variations.len(),
            });
        }

        Ok(())
    }
}

/// One labelled option a flag can resolve to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    /// Variation label, e.g. `treatment`
    pub name: String,

    /// Opaque payload handed back to the caller
    pub value: VariationValue,
}

impl Variation {
    pub fn new(name: impl Into<String>, value: impl Into<VariationValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, VariationValue::Boolean(value))
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, VariationValue::String(value.into()))
    }

    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, VariationValue::Number(value))
    }
}

/// Variation payload.
///
/// Serialized untagged, so catalog files can write plain JSON/TOML values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariationValue {
    Boolean(bool),
    String(String),
    Number(f64),
    Json(serde_json::Value),
}

impl VariationValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for VariationValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for VariationValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for VariationValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for VariationValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<serde_json::Value> for VariationValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_flag_variations() {
        let flag = Flag::boolean("hero", "Hero");

        assert_eq!(flag.len(), 2);
        assert_eq!(flag.variation(0).unwrap().name, "control");
        assert_eq!(flag.variation(1).unwrap().value.as_bool(), Some(true));
        assert_eq!(flag.variation_index("treatment"), Some(1));
        assert!(flag.validate().is_ok());
    }

    #[test]
    fn test_empty_flag_is_rejected() {
        let flag = Flag::new("empty", "Empty", Vec::new());

        assert!(matches!(flag.validate(), Err(FlagError::NoVariations(key)) if key == "empty"));
    }

    #[test]
    fn test_default_out_of_range_is_rejected() {
        let flag = Flag::boolean("hero", "Hero").with_default_variation(2);

        assert!(matches!(
            flag.validate(),
            Err(FlagError::DefaultOutOfRange { index: 2, len: 2, .. })
        ));
    }

    #[test]
    fn test_untagged_values_deserialize() {
        let flag: Flag = serde_json::from_value(serde_json::json!({
            "key": "promo-campaign",
            "name": "Promotional Campaign",
            "variations": [
                { "name": "default", "value": "default" },
                { "name": "discount", "value": 25.0 },
                { "name": "bundle", "value": { "items": 3 } }
            ]
        }))
        .unwrap();

        assert_eq!(flag.default_variation, 0);
        assert_eq!(flag.variations[0].value.as_string(), Some("default"));
        assert_eq!(flag.variations[1].value.as_number(), Some(25.0));
        assert!(flag.variations[2].value.as_json().is_some());
    }
}
