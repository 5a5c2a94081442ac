//! Scoped store over a [`StorageBackend`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::keys::Scope;

/// Scoped auth storage shared between the client and its host.
///
/// Cheap to clone: clones share the same backend.
#[derive(Clone)]
pub struct AuthStore {
    backend: Arc<dyn StorageBackend>,
}

impl AuthStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.backend.put(key, value)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.backend.get(key)
    }

    /// Read and remove in one logical operation.
    ///
    /// This is how the PKCE verifier is consumed: no other code observes
    /// the value between the read and the removal, so a second consumer
    /// sees `None`.
    pub fn take(&self, key: &str) -> Option<String> {
        let value = self.backend.get(key)?;
        self.backend.remove(key);
        Some(value)
    }

    pub fn remove(&self, key: &str) {
        self.backend.remove(key);
    }

    /// Clear every key owned by the scope.
    ///
    /// Clearing [`Scope::Session`] also clears [`Scope::Transaction`]:
    /// logout invalidates any in-flight attempt.
    pub fn clear(&self, scope: Scope) {
        for key in scope.keys() {
            self.backend.remove(key);
        }
        if scope == Scope::Session {
            for key in Scope::Transaction.keys() {
                self.backend.remove(key);
            }
        }
    }

    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.backend.put(key, &json)
    }

    /// Read and deserialize a session-scope record.
    ///
    /// A record that fails to deserialize is quarantined: the key and all
    /// related session keys are removed and the read yields `None`. The
    /// caller only ever observes "no session", never a parse error.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "removing corrupt persisted record");
                self.clear(Scope::Session);
                None
            }
        }
    }
}
