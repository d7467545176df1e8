//! Export configuration

use std::path::PathBuf;

use crate::export::DEFAULT_SHEET_NAME;

/// Default title shown on the share dialog
pub const DEFAULT_DIALOG_TITLE: &str = "Share export";

/// Configuration for table exports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Scratch directory that exported files are written into
    pub cache_dir: PathBuf,
    /// Name of the single worksheet
    pub sheet_name: String,
    /// Title passed to the share dialog
    pub dialog_title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            dialog_title: DEFAULT_DIALOG_TITLE.to_string(),
        }
    }
}

impl ExportConfig {
    /// Create a new configuration builder
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

/// Platform cache directory, or the temp dir when there is none
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("statline")
}

/// Builder for ExportConfig
#[derive(Debug, Clone, Default)]
pub struct ExportConfigBuilder {
    cache_dir: Option<PathBuf>,
    sheet_name: Option<String>,
    dialog_title: Option<String>,
}

impl ExportConfigBuilder {
    pub fn cache_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.into());
        self
    }

    pub fn sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    pub fn dialog_title<S: Into<String>>(mut self, title: S) -> Self {
        self.dialog_title = Some(title.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            cache_dir: self.cache_dir.unwrap_or(default.cache_dir),
            sheet_name: self.sheet_name.unwrap_or(default.sheet_name),
            dialog_title: self.dialog_title.unwrap_or(default.dialog_title),
        }
    }
}
