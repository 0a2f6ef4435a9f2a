mod memory;
mod types;
mod unavailable;

pub use types::{InMemoryTokenStore, TokenStore, UnavailableTokenStore};
