//! Table export pipeline: serialize, encode, write to scratch, share

use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::share::{OpenShare, ShareRequest, ShareSheet};
use super::storage::{CacheDir, ScopedStorage, validate_name};
use super::table::ExportTable;
use super::transport::TransportPayload;
use super::workbook::{WorkbookSerializer, XLSX_MIME_TYPE, XlsxSerializer};
use crate::config::{DEFAULT_DIALOG_TITLE, ExportConfig};
use crate::error::Result;

/// File produced by a single export call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
    pub dialog_title: String,
    /// Size of the workbook binary in bytes
    pub size: usize,
}

impl ExportArtifact {
    pub fn share_request(&self) -> ShareRequest {
        ShareRequest {
            path: self.path.clone(),
            mime_type: self.mime_type.to_string(),
            dialog_title: self.dialog_title.clone(),
        }
    }
}

/// Exports tables through a serializer, scoped storage and a share sheet
///
/// Each call is a single attempt; failures are returned as-is and never retried.
#[derive(Debug, Clone)]
pub struct TableExporter<W = XlsxSerializer, S = CacheDir, H = OpenShare> {
    serializer: W,
    storage: S,
    share: H,
    dialog_title: String,
}

impl TableExporter {
    /// Exporter backed by the real xlsx writer, cache directory and OS handler
    pub fn from_config(config: &ExportConfig) -> Self {
        TableExporter::new(
            XlsxSerializer::new(config.sheet_name.as_str()),
            CacheDir::new(&config.cache_dir),
            OpenShare,
        )
        .with_dialog_title(config.dialog_title.as_str())
    }
}

impl<W, S, H> TableExporter<W, S, H>
where
    W: WorkbookSerializer,
    S: ScopedStorage,
    H: ShareSheet,
{
    pub fn new(serializer: W, storage: S, share: H) -> Self {
        Self {
            serializer,
            storage,
            share,
            dialog_title: DEFAULT_DIALOG_TITLE.to_string(),
        }
    }

    pub fn with_dialog_title(mut self, title: impl Into<String>) -> Self {
        self.dialog_title = title.into();
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serialize the table and write it to scratch storage without sharing
    pub fn write_table(
        &self,
        table: &ExportTable,
        destination_name: &str,
    ) -> Result<ExportArtifact> {
        validate_name(destination_name)?;

        let bytes = self.serializer.serialize(table)?;
        let payload = TransportPayload::encode(&bytes);
        debug!(
            "Encoded {} byte workbook as {} byte transport payload",
            bytes.len(),
            payload.as_str().len()
        );

        let path = self.storage.write_scoped(destination_name, &payload)?;

        Ok(ExportArtifact {
            path,
            file_name: destination_name.to_string(),
            mime_type: XLSX_MIME_TYPE,
            dialog_title: self.dialog_title.clone(),
            size: bytes.len(),
        })
    }

    /// Run the full export: write the workbook, then hand it to the share sheet
    ///
    /// If sharing fails the scratch file is removed before the error is returned.
    pub fn export_table(
        &self,
        table: &ExportTable,
        destination_name: &str,
    ) -> Result<ExportArtifact> {
        let artifact = self.write_table(table, destination_name)?;

        if let Err(e) = self.share.share(&artifact.share_request()) {
            if let Err(cleanup) = self.storage.remove_scoped(&artifact.file_name) {
                warn!(
                    "Failed to remove {} after share error: {}",
                    artifact.path.display(),
                    cleanup
                );
            }
            return Err(e);
        }

        info!(
            "Exported {} records to {} ({} bytes)",
            table.len(),
            artifact.path.display(),
            artifact.size
        );
        Ok(artifact)
    }

    /// Delete a previously exported scratch file
    pub fn discard(&self, artifact: &ExportArtifact) -> Result<()> {
        self.storage.remove_scoped(&artifact.file_name)
    }
}
