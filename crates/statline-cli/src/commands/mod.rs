//! CLI command implementations.

pub mod box_score;
pub mod export;
pub mod inspect;
pub mod points;

use statline::{ExportArtifact, ExportConfig, ExportTable, TableExporter};

/// Write a table to the cache directory, optionally handing it to the share step
pub(crate) fn write_or_share(
    config: &ExportConfig,
    table: &ExportTable,
    name: &str,
    no_share: bool,
) -> statline::Result<ExportArtifact> {
    let exporter = TableExporter::from_config(config);
    if no_share {
        exporter.write_table(table, name)
    } else {
        exporter.export_table(table, name)
    }
}
