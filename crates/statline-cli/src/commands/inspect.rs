//! Inspect command: dump a workbook's first sheet.

use std::path::Path;

use anyhow::{Context, Result};
use statline::{ExportTable, read_workbook};

pub fn run(path: &Path) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let table = read_workbook(&bytes).context("Failed to parse workbook")?;
    print!("{}", format_tsv(&table));
    Ok(())
}

/// Header line plus one tab-separated line per record
pub fn format_tsv(table: &ExportTable) -> String {
    let mut output = String::new();
    if table.is_empty() {
        return output;
    }
    output.push_str(&table.columns().join("\t"));
    output.push('\n');
    for record in table.records() {
        let values: Vec<String> = record.values().map(|v| v.to_string()).collect();
        output.push_str(&values.join("\t"));
        output.push('\n');
    }
    output
}
