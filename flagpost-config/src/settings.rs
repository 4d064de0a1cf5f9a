// Typed Flagpost settings and their builder

use crate::env::{DEFAULT_PREFIX, EnvLoader};
use crate::loader::{ConfigLoader, FileFormat};
use crate::validation::{ConfigValidator, Validate};
use crate::{ConfigError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: &[&str] = &["json", "pretty", "compact"];
pub const CATALOG_EXTENSIONS: &[&str] = &["json", "toml"];

/// Runtime settings for a Flagpost pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Resolve content as preview copies unless a call says otherwise
    #[serde(deserialize_with = "flexible_bool")]
    pub preview: bool,

    /// Delay content reads the way a hosted delivery API would
    #[serde(deserialize_with = "flexible_bool")]
    pub simulate_latency: bool,

    /// Catalog file (JSON or TOML) replacing the built-in demo catalog
    #[serde(deserialize_with = "optional_path")]
    pub catalog_path: Option<PathBuf>,

    pub log_level: String,

    pub log_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview: false,
            simulate_latency: false,
            catalog_path: None,
            log_level: "info".to_string(),
            log_format: "json".to_string(),
        }
    }
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Defaults overridden by `FLAGPOST_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::builder().load_env().build()
    }

    /// Load settings from a single file, with environment overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::builder().add_file(path).load_env().build()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(&self.log_level, "log_level")?;
        ConfigValidator::one_of(&self.log_level, LOG_LEVELS, "log_level")?;
        ConfigValidator::not_empty(&self.log_format, "log_format")?;
        ConfigValidator::one_of(&self.log_format, LOG_FORMATS, "log_format")?;
        if let Some(path) = &self.catalog_path {
            ConfigValidator::has_extension(path, CATALOG_EXTENSIONS, "catalog_path")?;
        }
        Ok(())
    }
}

/// Builder for [`Settings`].
///
/// Sources apply in order: defaults, `.env` (into the process environment),
/// files in the order added, environment variables, explicit overrides.
pub struct SettingsBuilder {
    prefix: String,
    load_env: bool,
    load_dotenv: bool,
    dotenv_path: Option<PathBuf>,
    files: Vec<(PathBuf, Option<FileFormat>)>,
    overrides: Map<String, Value>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            load_env: false,
            load_dotenv: false,
            dotenv_path: None,
            files: Vec::new(),
            overrides: Map::new(),
        }
    }

    /// Set environment variable prefix (default `FLAGPOST`)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable loading from environment variables
    pub fn load_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Enable loading a .env file; `None` searches the usual locations and
    /// tolerates a missing file.
    pub fn load_dotenv(mut self, path: Option<PathBuf>) -> Self {
        self.load_dotenv = true;
        self.dotenv_path = path;
        self.load_env = true;
        self
    }

    /// Add a settings file; format is detected from the extension.
    pub fn add_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push((path.into(), None));
        self
    }

    /// Add a settings file with an explicit format.
    pub fn add_file_with_format(mut self, path: impl Into<PathBuf>, format: FileFormat) -> Self {
        self.files.push((path.into(), Some(format)));
        self
    }

    /// Set a value that wins over every other source.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Build and validate the settings.
    pub fn build(self) -> Result<Settings> {
        let env = EnvLoader::new(self.prefix.clone());
        let mut merged = Map::new();

        if self.load_dotenv {
            match &self.dotenv_path {
                Some(path) => {
                    dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
                }
                None => {
                    dotenvy::dotenv().ok();
                }
            }
        }

        for (path, format) in &self.files {
            let loader = match format {
                Some(format) => ConfigLoader::new(*format),
                None => ConfigLoader::auto(path)?,
            };
            debug!(path = %path.display(), format = ?loader.format(), "Loading settings file");

            let values = loader.load_file(path)?;
            if loader.format() == FileFormat::Env {
                merge_env_pairs(&mut merged, &env, values);
            } else {
                merged.extend(values);
            }
        }

        if self.load_env {
            for (key, value) in env.load() {
                merged.insert(key, Value::String(value));
            }
        }

        merged.extend(self.overrides);

        let settings: Settings = serde_json::from_value(Value::Object(merged))
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;
        settings.validate()?;

        Ok(settings)
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_env_pairs(merged: &mut Map<String, Value>, env: &EnvLoader, values: Map<String, Value>) {
    for (key, value) in values {
        let key = env.strip(&key).unwrap_or_else(|| key.to_lowercase());
        merged.insert(key, value);
    }
}

fn flexible_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => Ok(b),
        Raw::Int(n) => Ok(n != 0),
        Raw::Text(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean value: {}",
                other
            ))),
        },
    }
}

fn optional_path<'de, D>(deserializer: D) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()).map(PathBuf::from))
}
