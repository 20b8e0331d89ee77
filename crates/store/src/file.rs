//! File-backed key-value store.
//!
//! One JSON object per store file, keys to string values - the on-disk
//! equivalent of a browser origin's local storage. Every write replaces the
//! whole file atomically (write to a temp file in the same directory, then
//! rename), so a concurrent reader sees either the old or the new contents,
//! never a torn write.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::kv::KeyValueStore;

/// Errors opening a file store.
#[derive(Debug, Error)]
pub enum FileStoreError {
    /// The store file exists but could not be read.
    #[error("failed to read store file: {0}")]
    Io(#[from] io::Error),
}

/// A [`KeyValueStore`] persisted to a single JSON file.
///
/// Contents are loaded once at open. Writes go to disk synchronously before
/// `set`/`remove` return; write failures are logged and the in-memory copy
/// stays authoritative for the rest of the session.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store file, creating an empty store if the file is missing.
    ///
    /// A file that exists but fails to parse is treated as empty (with a
    /// warning); the next write replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError::Io`] when an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FileStoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "discarding malformed store file: {e}");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let json = serde_json::to_string_pretty(&self.entries).map_err(io::Error::from)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn flush_logged(&self) {
        if let Err(e) = self.flush() {
            tracing::error!(path = %self.path.display(), "failed to persist store file: {e}");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush_logged();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush_logged();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(dir.path().join("data.json")).expect("open");
        assert_eq!(store.get("cart"), None);
    }

    #[test]
    fn test_writes_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");

        let mut store = FileStore::open(&path).expect("open");
        store.set("cart", r#"[{"product_id":1,"quantity":2}]"#);
        store.set("favorites", "[3]");
        drop(store);

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(
            reopened.get("cart"),
            Some(r#"[{"product_id":1,"quantity":2}]"#.to_string())
        );
        assert_eq!(reopened.get("favorites"), Some("[3]".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");

        let mut store = FileStore::open(&path).expect("open");
        store.set("cart", "[]");
        store.remove("cart");
        drop(store);

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("cart"), None);
    }

    #[test]
    fn test_corrupted_file_opens_empty_and_recovers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{not json at all").expect("write garbage");

        let mut store = FileStore::open(&path).expect("open");
        assert_eq!(store.get("cart"), None);

        // the next write replaces the garbage with valid contents
        store.set("cart", "[]");
        drop(store);
        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("cart"), Some("[]".to_string()));
    }
}
