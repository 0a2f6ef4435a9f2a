use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::config::SG_TOKEN_STORAGE_KEY;
use crate::storage::errors::StorageError;

use super::types::{InMemoryTokenStore, TokenStore};

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::with_key(SG_TOKEN_STORAGE_KEY.as_str())
    }

    /// Create a store bound to an explicit storage key instead of the
    /// configured one.
    pub fn with_key(key: impl Into<String>) -> Self {
        tracing::debug!("Creating new in-memory token store");
        Self {
            key: key.into(),
            entry: Mutex::new(HashMap::new()),
        }
    }

    fn lock_entry(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entry
            .lock()
            .map_err(|e| StorageError::Access(e.to_string()))
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self) -> Result<Option<String>, StorageError> {
        Ok(self.lock_entry()?.get(&self.key).cloned())
    }

    async fn set(&self, token: &str) -> Result<(), StorageError> {
        self.lock_entry()?.insert(self.key.clone(), token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.lock_entry()?.remove(&self.key);
        Ok(())
    }
}
