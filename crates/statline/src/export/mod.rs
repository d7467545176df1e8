//! Spreadsheet export
//!
//! [`TableExporter`] runs the export sequence over three seams:
//! [`WorkbookSerializer`] (table to workbook binary), [`ScopedStorage`]
//! (scratch file writes) and [`ShareSheet`] (platform share dialog).

mod exporter;
mod share;
mod storage;
mod table;
mod transport;
mod workbook;

pub use exporter::*;
pub use share::*;
pub use storage::{CacheDir, ScopedStorage};
pub use table::*;
pub use transport::*;
pub use workbook::*;
