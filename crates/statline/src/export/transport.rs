//! Text-safe transport encoding for workbook payloads

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;

/// Base64-encoded binary payload handed to scoped storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportPayload(String);

impl TransportPayload {
    pub fn encode(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// Wrap text that is expected to already be base64
    pub fn from_encoded(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(&self.0)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_text_is_ascii() {
        let payload = TransportPayload::encode(&[0x50, 0x4b, 0x03, 0x04, 0xff, 0x00]);
        assert!(payload.as_str().is_ascii());
        assert_eq!(payload.as_str(), "UEsDBP8A");
    }

    #[test]
    fn test_invalid_text_fails_to_decode() {
        let payload = TransportPayload::from_encoded("not base64!");
        assert!(payload.decode().unwrap_err().is_encoding());
    }
}
