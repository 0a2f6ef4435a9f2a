use async_trait::async_trait;

use crate::storage::errors::StorageError;

use super::types::{TokenStore, UnavailableTokenStore};

impl UnavailableTokenStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnavailableTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for UnavailableTokenStore {
    async fn get(&self) -> Result<Option<String>, StorageError> {
        // No storage signal in this environment; absent, not an error.
        Ok(None)
    }

    async fn set(&self, _token: &str) -> Result<(), StorageError> {
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
