use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No share mechanism available on this platform")]
    ShareUnavailable,

    #[error("Share failed: {0}")]
    ShareFailed(String),

    #[error("Invalid destination name: {0:?}")]
    InvalidDestination(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the table (or its serialized form) was rejected
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }

    /// Check if this is a filesystem error
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    pub fn is_share_unavailable(&self) -> bool {
        matches!(self, Error::ShareUnavailable)
    }

    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        Error::Encoding(e.to_string())
    }
}

impl From<calamine::XlsxError> for Error {
    fn from(e: calamine::XlsxError) -> Self {
        Error::Encoding(e.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::Encoding(format!("invalid transport payload: {}", e))
    }
}
