use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::LocalStorage;

/// `localStorage` emulation backed by a JSON object file mapping keys to string values.
#[derive(Debug, Clone)]
pub struct FileLocalStorage {
    path: PathBuf,
}

impl FileLocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, format!("{}\n", content))?;
        Ok(())
    }
}

impl LocalStorage for FileLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_entries()?.remove(key))
    }

    /// An unparseable storage file is replaced rather than blocking the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(AppError::Json(err)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "local storage file is unparseable, overwriting"
                );
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get_item("@RocketShoes:cart").unwrap(), None);
    }

    #[test]
    fn set_then_get_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(dir.path().join("nested/storage.json"));
        storage.set_item("k", "[1,2]").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(dir.path().join("storage.json"));
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        storage.set_item("a", "3").unwrap();
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("3"));
        assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn reading_does_not_create_the_file() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(dir.path().join("storage.json"));
        storage.get_item("nope").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();
        let storage = FileLocalStorage::new(path);
        assert!(matches!(storage.get_item("k"), Err(AppError::Json(_))));
    }

    #[test]
    fn write_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();
        let storage = FileLocalStorage::new(&path);

        storage.set_item("k", "[]").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("[]"));
        assert!(fs::read_to_string(&path).unwrap().contains("\"k\""));
    }
}
