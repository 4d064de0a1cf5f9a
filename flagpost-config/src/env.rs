// Environment variable loading

use std::collections::HashMap;
use std::env;

/// Default prefix for Flagpost environment variables
pub const DEFAULT_PREFIX: &str = "FLAGPOST";

/// Environment variable loader
///
/// `FLAGPOST_LOG_LEVEL=debug` is exposed as `log_level`.
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load every variable carrying the prefix, keyed by the lowercased
    /// remainder.
    pub fn load(&self) -> HashMap<String, String> {
        env::vars()
            .filter_map(|(key, value)| self.strip(&key).map(|name| (name, value)))
            .collect()
    }

    /// Settings key for a variable name, if it carries the prefix.
    pub fn strip(&self, key: &str) -> Option<String> {
        key.strip_prefix(&self.prefix)
            .and_then(|rest| rest.strip_prefix('_'))
            .filter(|rest| !rest.is_empty())
            .map(str::to_lowercase)
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}
