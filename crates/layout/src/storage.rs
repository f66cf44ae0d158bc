//! Durable key-value storage port
//!
//! The layout store persists through this small port so the backend is
//! swappable: tests use [`MemoryStorage`], the binary uses [`FileStorage`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::warn;

/// Key-value persistence port
///
/// Reads are infallible (a failed read is "absent"); writes surface IO
/// errors so an explicit save can report failure.
pub trait StoragePort {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Remove the value stored under `key`, if any
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// In-memory storage backend
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: one file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir` (created on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; replace separators just in case
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("quotation-layout"), None);

        storage.set("quotation-layout", "{}").unwrap();
        assert_eq!(storage.get("quotation-layout").as_deref(), Some("{}"));

        storage.set("quotation-layout", r#"{"a":1}"#).unwrap();
        assert_eq!(storage.get("quotation-layout").as_deref(), Some(r#"{"a":1}"#));

        storage.remove("quotation-layout").unwrap();
        assert_eq!(storage.get("quotation-layout"), None);
    }

    #[test]
    fn test_memory_storage_remove_missing_is_ok() {
        let mut storage = MemoryStorage::new();
        assert!(storage.remove("nothing-here").is_ok());
    }

    #[test]
    fn test_file_storage_key_paths() {
        let storage = FileStorage::new("/tmp/quoteforge");
        assert_eq!(
            storage.path_for("quotation-layout"),
            PathBuf::from("/tmp/quoteforge/quotation-layout.json")
        );
        assert_eq!(
            storage.path_for("a/b"),
            PathBuf::from("/tmp/quoteforge/a_b.json")
        );
    }
}
