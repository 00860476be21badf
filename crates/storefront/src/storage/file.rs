//! JSON file storage backend.
//!
//! The whole store is one JSON object of string values. Every write rewrites
//! the file through a temporary sibling and a rename, so a crash mid-write
//! leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{LocalStorage, StorageError};

/// A [`LocalStorage`] persisted to a JSON file on disk.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`, creating it lazily on first write.
    ///
    /// A file that is not a JSON object of strings is logged and treated as
    /// empty; the next write replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Discarding malformed storage file"
                );
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), keys = items.len(), "Opened file storage");
        Ok(Self { path, items })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        self.write()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.items.remove(key).is_some() {
            self.write()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(storage.get_item("cart").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set_item("currency", "EUR").unwrap();
        storage.set_item("cart", "[]").unwrap();
        storage.remove_item("cart").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("currency").unwrap().as_deref(), Some("EUR"));
        assert_eq!(reopened.get_item("cart").unwrap(), None);
    }

    #[test]
    fn test_malformed_file_opens_empty_and_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");

        for content in [r#"{"cart": "[]", truncated"#, "not json", r#"{"cart": 7}"#] {
            fs::write(&path, content).unwrap();

            let mut storage = FileStorage::open(&path).unwrap();
            assert_eq!(storage.get_item("cart").unwrap(), None);

            storage.set_item("currency", "GBP").unwrap();
            let rewritten: BTreeMap<String, String> =
                serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(rewritten.len(), 1);
            assert_eq!(rewritten["currency"], "GBP");
        }
    }
}
