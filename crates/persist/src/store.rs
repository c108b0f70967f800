//! Key-value storage backends
//!
//! The vault reads and writes opaque byte blobs under fixed keys. Hosts
//! pick the backend: in-memory for tests and ephemeral play, a directory of
//! files for real installs, or their own implementation of the trait.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Byte-blob storage keyed by short string names.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Volatile store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.map.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.map.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.map.remove(key);
        Ok(())
    }
}

/// One file per key under a root directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("creating store directory {}", root.display()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for DirStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("removing {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("missing").unwrap(), None);

        store.write("key", b"value").unwrap();
        assert_eq!(store.read("key").unwrap().as_deref(), Some(&b"value"[..]));

        store.remove("key").unwrap();
        assert_eq!(store.read("key").unwrap(), None);
        // Removing a missing key is fine.
        store.remove("key").unwrap();
    }
}
