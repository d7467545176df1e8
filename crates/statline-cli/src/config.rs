//! Config file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use statline::ExportConfig;

/// On-disk configuration; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub cache_dir: Option<PathBuf>,
    pub sheet_name: Option<String>,
    pub dialog_title: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Layer this file over the defaults, then apply command-line overrides
    pub fn to_export_config(
        &self,
        cache_dir: Option<&Path>,
        sheet_name: Option<&str>,
    ) -> ExportConfig {
        let mut builder = ExportConfig::builder();

        if let Some(dir) = cache_dir.or(self.cache_dir.as_deref()) {
            builder = builder.cache_dir(dir);
        }
        if let Some(sheet) = sheet_name.or(self.sheet_name.as_deref()) {
            builder = builder.sheet_name(sheet);
        }
        if let Some(title) = self.dialog_title.as_deref() {
            builder = builder.dialog_title(title);
        }

        builder.build()
    }
}
