//! # statline
//!
//! Core library for the statline basketball stat tracker.
//!
//! This crate provides:
//! - Point values for scoring actions and per-player box scores
//! - A uniform tabular model for exported data
//! - Spreadsheet (`.xlsx`) export to a scratch directory followed by a
//!   platform share step

pub mod config;
pub mod error;
pub mod export;
pub mod prelude;
pub mod scoring;

pub use config::{ExportConfig, ExportConfigBuilder, default_cache_dir};
pub use error::{Error, Result};
pub use export::{
    CacheDir, CellValue, DEFAULT_SHEET_NAME, ExportArtifact, ExportRecord, ExportTable, NoShare,
    OpenShare, ScopedStorage, ShareRequest, ShareSheet, TableExporter, TransportPayload,
    WorkbookSerializer, XLSX_MIME_TYPE, XlsxSerializer, read_workbook,
};
pub use scoring::{
    BOX_SCORE_COLUMNS, BoxScore, PlayEntry, PlayerLine, ScoringAction, points_for_action,
    points_for_play, total_points,
};
