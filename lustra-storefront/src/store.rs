//! Collection persistence
//!
//! The cart and the wishlist survive restarts through a [`CollectionStore`].
//! Storage is local-device only with no locking: concurrent writers
//! (several app instances on one data directory) are last-writer-wins,
//! which is the accepted consistency model here.

use shared::collection::Collection;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage key of the cart collection
pub const CART_KEY: &str = "cart";
/// Storage key of the wishlist collection
pub const LIKED_KEY: &str = "liked";

/// Durable keyed storage for collections
///
/// `load` fails soft: a missing or unreadable value is an empty
/// collection, never an error. `save` overwrites whatever is stored.
pub trait CollectionStore: Send {
    fn load(&self, key: &str) -> Collection;
    fn save(&mut self, key: &str, collection: &Collection) -> io::Result<()>;

    fn clear(&mut self, key: &str) -> io::Result<()> {
        self.save(key, &Collection::new())
    }
}

/// File-backed collection store
///
/// One pretty-printed JSON file per key under the data directory, plus a
/// `<key>Count` mirror holding the line count as an integer string.
#[derive(Debug, Clone)]
pub struct FileCollectionStore {
    dir: PathBuf,
}

impl FileCollectionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn collection_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn count_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}Count", key))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CollectionStore for FileCollectionStore {
    fn load(&self, key: &str) -> Collection {
        let path = self.collection_path(key);
        if !path.exists() {
            return Collection::new();
        }
        match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!(key = %key, error = %e, "Malformed collection file, starting empty");
                Collection::new()
            }),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Unreadable collection file, starting empty");
                Collection::new()
            }
        }
    }

    fn save(&mut self, key: &str, collection: &Collection) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(collection)?;
        fs::write(self.collection_path(key), json)?;
        fs::write(self.count_path(key), collection.len().to_string())?;
        tracing::debug!(key = %key, lines = collection.len(), "Collection saved");
        Ok(())
    }
}

/// In-memory collection store, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryCollectionStore {
    data: HashMap<String, Collection>,
}

impl MemoryCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for MemoryCollectionStore {
    fn load(&self, key: &str) -> Collection {
        self.data.get(key).cloned().unwrap_or_default()
    }

    fn save(&mut self, key: &str, collection: &Collection) -> io::Result<()> {
        self.data.insert(key.to_string(), collection.clone());
        Ok(())
    }
}
