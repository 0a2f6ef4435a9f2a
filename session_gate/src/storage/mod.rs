mod config;
mod errors;
mod token_store;

pub use config::SG_TOKEN_STORAGE_KEY;
pub use errors::StorageError;
pub use token_store::{InMemoryTokenStore, TokenStore, UnavailableTokenStore};
