mod client;
mod config;
mod errors;
mod types;

pub use client::{AuthApi, HttpAuthApi};
pub use config::AUTH_API_URL;
pub use errors::ApiError;
pub use types::{AccessToken, LoginRequest};
