use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum StorageError {
    /// The backing store exists but could not be read or written.
    #[error("Storage access error: {0}")]
    Access(String),
}
