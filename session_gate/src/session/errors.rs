use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Error from the persistent token store
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
