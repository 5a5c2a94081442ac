//! Host-pluggable persistence backend.

use crate::error::StoreError;
use parking_lot::RwLock;
use std::collections::HashMap;

/// User-implemented persistence layer for auth state.
///
/// Browser hosts back this with `localStorage`; tests and native hosts use
/// [`MemoryBackend`]. All methods are synchronous — the store treats each
/// call as a single logical operation.
pub trait StorageBackend: Send + Sync {
    /// Read a value, or `None` if the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. May fail (e.g. quota exceeded).
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and non-browser hosts.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}
