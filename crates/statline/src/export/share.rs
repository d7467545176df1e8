//! Platform share mechanism

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// What gets handed to the platform share dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub path: PathBuf,
    pub mime_type: String,
    pub dialog_title: String,
}

pub trait ShareSheet {
    fn share(&self, request: &ShareRequest) -> Result<()>;
}

/// Host without any share capability
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShare;

impl ShareSheet for NoShare {
    fn share(&self, _request: &ShareRequest) -> Result<()> {
        Err(Error::ShareUnavailable)
    }
}

/// Desktop stand-in for a share sheet: hands the file to the OS default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenShare;

impl ShareSheet for OpenShare {
    fn share(&self, request: &ShareRequest) -> Result<()> {
        if open::commands(&request.path).is_empty() {
            return Err(Error::ShareUnavailable);
        }

        debug!(
            "Sharing {} ({}) as \"{}\"",
            request.path.display(),
            request.mime_type,
            request.dialog_title
        );

        open::that_detached(&request.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ShareUnavailable,
            _ => Error::ShareFailed(e.to_string()),
        })
    }
}
