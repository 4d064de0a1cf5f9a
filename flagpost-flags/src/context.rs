//! User Context
//!
//! The identity and attributes a flag is evaluated for.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const DEMO_KEY_PREFIX: &str = "demo-user-";
const DEMO_KEY_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Evaluation context (user identity and attributes)
///
/// Only `key` takes part in bucketing. The other attributes, including
/// `custom`, are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    /// Stable identity used for bucketing
    #[serde(default)]
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Opaque custom attributes
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom: HashMap<String, serde_json::Value>,
}

impl UserContext {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Build the default demo context with a freshly generated key.
    ///
    /// The key is `demo-user-` followed by nine random base-36 characters.
    pub fn demo() -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..DEMO_KEY_SUFFIX_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();

        Self::new(format!("{DEMO_KEY_PREFIX}{suffix}"))
            .with_name("Demo User")
            .with_email("demo@example.com")
            .with_country("US")
            .with_custom("plan", "enterprise")
            .with_custom("beta_user", true)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_custom(
        mut self,
        attribute: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.custom.insert(attribute.into(), value.into());
        self
    }

    /// Read an attribute as a string.
    ///
    /// Built-in attributes (`key`, `name`, `email`, `country`) take precedence
    /// over custom ones. Non-string custom values are rendered as JSON.
    pub fn get(&self, attribute: &str) -> Option<String> {
        match attribute {
            "key" => Some(self.key.clone()),
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "country" => self.country.clone(),
            other => self.custom.get(other).map(|value| match value {
                serde_json::Value::String(s) => s.clone(),
                v => v.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_context_shape() {
        let context = UserContext::demo();

        let suffix = context.key.strip_prefix(DEMO_KEY_PREFIX).unwrap();
        assert_eq!(suffix.len(), DEMO_KEY_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
        assert_eq!(context.name.as_deref(), Some("Demo User"));
        assert_eq!(context.get("plan").as_deref(), Some("enterprise"));
        assert_eq!(context.get("beta_user").as_deref(), Some("true"));
    }

    #[test]
    fn test_builtin_attributes() {
        let context = UserContext::new("user-1")
            .with_email("user@example.com")
            .with_custom("email", "shadowed@example.com");

        assert_eq!(context.get("key").as_deref(), Some("user-1"));
        assert_eq!(context.get("email").as_deref(), Some("user@example.com"));
        assert_eq!(context.get("country"), None);
        assert_eq!(context.get("missing"), None);
    }

    #[test]
    fn test_missing_key_deserializes_empty() {
        let context: UserContext =
            serde_json::from_str(r#"{"name": "Anonymous", "custom": {"tier": 2}}"#).unwrap();

        assert_eq!(context.key, "");
        assert_eq!(context.get("tier").as_deref(), Some("2"));
    }
}
