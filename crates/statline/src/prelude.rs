//! Prelude module for convenient imports
//!
//! ```ignore
//! use statline::prelude::*;
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Scoring
pub use crate::scoring::{
    BoxScore, PlayEntry, PlayerLine, ScoringAction, points_for_action, points_for_play,
};

// Export
pub use crate::config::ExportConfig;
pub use crate::export::{
    CellValue, ExportArtifact, ExportRecord, ExportTable, ScopedStorage, ShareSheet,
    TableExporter, WorkbookSerializer,
};
