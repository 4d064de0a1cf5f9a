// Settings validation

use crate::{ConfigError, Result};

/// Trait for validating settings
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reusable validation rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a value is one of `allowed`, ignoring ASCII case
    pub fn one_of(value: &str, allowed: &[&str], field: &str) -> Result<()> {
        if !allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be one of [{}], got '{}'",
                field,
                allowed.join(", "),
                value
            )));
        }
        Ok(())
    }

    /// Validate that a path ends in one of `extensions`
    pub fn has_extension(path: &std::path::Path, extensions: &[&str], field: &str) -> Result<()> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::one_of(ext, extensions, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_not_empty_validation() {
        assert!(ConfigValidator::not_empty("value", "field").is_ok());
        assert!(ConfigValidator::not_empty("", "field").is_err());
    }

    #[test]
    fn test_one_of_validation() {
        let allowed = ["json", "pretty", "compact"];
        assert!(ConfigValidator::one_of("json", &allowed, "log_format").is_ok());
        assert!(ConfigValidator::one_of("Pretty", &allowed, "log_format").is_ok());

        let err = ConfigValidator::one_of("xml", &allowed, "log_format").unwrap_err();
        assert!(err.to_string().contains("log_format"));
    }

    #[test]
    fn test_extension_validation() {
        let allowed = ["json", "toml"];
        assert!(ConfigValidator::has_extension(Path::new("a/catalog.toml"), &allowed, "f").is_ok());
        assert!(ConfigValidator::has_extension(Path::new("catalog.yaml"), &allowed, "f").is_err());
        assert!(ConfigValidator::has_extension(Path::new("catalog"), &allowed, "f").is_err());
    }
}
