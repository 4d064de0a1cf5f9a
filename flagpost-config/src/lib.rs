// Settings management for Flagpost
//
// Settings are assembled from defaults, settings files (JSON, TOML or
// dotenv-style), a `.env` file and `FLAGPOST_*` environment variables, then
// validated.

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::{DEFAULT_PREFIX, EnvLoader};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{Settings, SettingsBuilder};
pub use validation::{ConfigValidator, Validate};
