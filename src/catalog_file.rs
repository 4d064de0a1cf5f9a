//! Catalog files
//!
//! A single JSON or TOML document carrying flags, content entries and flag
//! mappings, loaded once at startup in place of the built-in demo data.

use crate::error::{Error, Result};
use crate::seed;
use flagpost_config::FileFormat;
use flagpost_content::{ContentCatalog, ContentEntry, FlagMapping};
use flagpost_flags::{Flag, FlagCatalog};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub flags: Vec<Flag>,
    #[serde(default)]
    pub entries: Vec<ContentEntry>,
    #[serde(default)]
    pub mappings: Vec<FlagMapping>,
}

impl CatalogFile {
    /// The built-in demo catalog as a document.
    pub fn demo() -> Self {
        Self {
            flags: seed::demo_flags(),
            entries: seed::demo_entries(),
            mappings: seed::demo_mappings(),
        }
    }

    /// Read a catalog file; the format follows the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let catalog = Self::parse(&content, format)?;

        info!(
            path = %path.display(),
            flags = catalog.flags.len(),
            entries = catalog.entries.len(),
            mappings = catalog.mappings.len(),
            "Catalog file loaded"
        );
        Ok(catalog)
    }

    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        match format {
            FileFormat::Json => {
                serde_json::from_str(content).map_err(|e| Error::CatalogParse(e.to_string()))
            }
            FileFormat::Toml => {
                toml::from_str(content).map_err(|e| Error::CatalogParse(e.to_string()))
            }
            FileFormat::Env => Err(Error::CatalogParse(
                "catalogs must be JSON or TOML".to_string(),
            )),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::CatalogParse(e.to_string()))
    }

    /// Validate into flag and content catalogs.
    ///
    /// Mappings pointing at unknown flags or entries are kept but logged; the
    /// resolver reports them as empty results.
    pub fn into_catalogs(self) -> Result<(FlagCatalog, ContentCatalog)> {
        let flags = FlagCatalog::new(self.flags)?;
        let content = ContentCatalog::new(self.entries, self.mappings)?;

        for mapping in content.mappings() {
            if !flags.contains(&mapping.flag_key) {
                warn!(flag = %mapping.flag_key, "Content mapping for unknown flag");
            }
        }
        for (flag, entry) in content.dangling_references() {
            warn!(flag, entry, "Content mapping points at a missing entry");
        }

        Ok((flags, content))
    }
}
