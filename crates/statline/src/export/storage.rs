//! Scratch storage scoped to a single directory

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use tracing::debug;

use super::transport::TransportPayload;
use crate::error::{Error, Result};

/// Write/read/delete capability confined to one directory
pub trait ScopedStorage {
    /// Decode and write a payload as `name`, returning its full path.
    ///
    /// Either the whole file exists afterwards or nothing does.
    fn write_scoped(&self, name: &str, payload: &TransportPayload) -> Result<PathBuf>;

    fn read_scoped(&self, name: &str) -> Result<TransportPayload>;

    fn remove_scoped(&self, name: &str) -> Result<()>;
}

/// Filesystem storage rooted at a cache directory
#[derive(Debug, Clone)]
pub struct CacheDir {
    root: PathBuf,
}

impl CacheDir {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a file name inside the root, rejecting anything that could escape it
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(Error::InvalidDestination(name.to_string()));
    }
    Ok(())
}

impl ScopedStorage for CacheDir {
    fn write_scoped(&self, name: &str, payload: &TransportPayload) -> Result<PathBuf> {
        let path = self.resolve(name)?;
        let bytes = payload.decode()?;

        fs::create_dir_all(&self.root)?;

        // Dropping without commit discards the temporary file
        let mut file = AtomicWriteFile::open(&path)?;
        file.write_all(&bytes)?;
        file.commit()?;

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }

    fn read_scoped(&self, name: &str) -> Result<TransportPayload> {
        let path = self.resolve(name)?;
        let bytes = fs::read(path)?;
        Ok(TransportPayload::encode(&bytes))
    }

    fn remove_scoped(&self, name: &str) -> Result<()> {
        let path = self.resolve(name)?;
        fs::remove_file(&path)?;
        debug!("Removed {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_read_remove() {
        let dir = TempDir::new().unwrap();
        let storage = CacheDir::new(dir.path());
        let payload = TransportPayload::encode(b"workbook bytes");

        let path = storage.write_scoped("stats.xlsx", &payload).unwrap();
        assert_eq!(path, dir.path().join("stats.xlsx"));
        assert_eq!(fs::read(&path).unwrap(), b"workbook bytes");
        assert_eq!(storage.read_scoped("stats.xlsx").unwrap(), payload);

        storage.remove_scoped("stats.xlsx").unwrap();
        assert!(!path.exists());
        assert!(storage.read_scoped("stats.xlsx").unwrap_err().is_not_found());
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let dir = TempDir::new().unwrap();
        let storage = CacheDir::new(dir.path());

        storage
            .write_scoped("a.xlsx", &TransportPayload::encode(b"first version"))
            .unwrap();
        storage
            .write_scoped("a.xlsx", &TransportPayload::encode(b"second"))
            .unwrap();

        assert_eq!(fs::read(dir.path().join("a.xlsx")).unwrap(), b"second");
    }

    #[test]
    fn test_creates_missing_root() {
        let dir = TempDir::new().unwrap();
        let storage = CacheDir::new(dir.path().join("nested").join("cache"));

        let path = storage
            .write_scoped("a.xlsx", &TransportPayload::encode(b"x"))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_rejects_escaping_names() {
        let dir = TempDir::new().unwrap();
        let storage = CacheDir::new(dir.path());
        let payload = TransportPayload::encode(b"x");

        for name in ["", ".", "..", "../evil.xlsx", "sub/file.xlsx", "sub\\file.xlsx"] {
            let err = storage.write_scoped(name, &payload).unwrap_err();
            assert!(matches!(err, Error::InvalidDestination(_)), "{name:?}");
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_payload_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let storage = CacheDir::new(dir.path());

        let err = storage
            .write_scoped("a.xlsx", &TransportPayload::from_encoded("%%%"))
            .unwrap_err();
        assert!(err.is_encoding());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unwritable_root_is_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"plain file").unwrap();

        let storage = CacheDir::new(blocker.join("cache"));
        let err = storage
            .write_scoped("a.xlsx", &TransportPayload::encode(b"x"))
            .unwrap_err();

        assert!(err.is_io());
        assert!(!blocker.join("cache").join("a.xlsx").exists());
        assert_eq!(fs::read(&blocker).unwrap(), b"plain file");
    }
}
