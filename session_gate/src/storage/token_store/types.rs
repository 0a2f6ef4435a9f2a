use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::errors::StorageError;

/// A browser-persistent key/value slot for one token string.
pub struct InMemoryTokenStore {
    pub(super) key: String,
    pub(super) entry: Mutex<HashMap<String, String>>,
}

/// Stand-in for an environment with no persistent storage (a non-interactive
/// render pass, or a browser with storage disabled). Every operation
/// succeeds; reads yield nothing. Callers never need to know which
/// environment they are in.
pub struct UnavailableTokenStore;

// Trait
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    /// Read the stored token, if any. An unavailable store reads as absent,
    /// never as an error.
    async fn get(&self) -> Result<Option<String>, StorageError>;

    /// Persist the token, replacing any previous value.
    async fn set(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token. Clearing an empty store is a no-op.
    async fn clear(&self) -> Result<(), StorageError>;
}
