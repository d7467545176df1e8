//! Export command for arbitrary JSON tables.

use std::path::Path;

use anyhow::{Context, Result};
use statline::{ExportConfig, ExportTable};
use tracing::info;

pub fn run(config: &ExportConfig, table_path: &Path, name: &str, no_share: bool) -> Result<()> {
    let content = std::fs::read_to_string(table_path)
        .with_context(|| format!("Failed to read table from {}", table_path.display()))?;
    let table = ExportTable::from_json(&content).context("Failed to load table")?;
    info!(
        "Loaded {} records with columns [{}]",
        table.len(),
        table.columns().join(", ")
    );

    let artifact = super::write_or_share(config, &table, name, no_share)?;
    eprintln!("Exported to: {}", artifact.path.display());

    Ok(())
}
