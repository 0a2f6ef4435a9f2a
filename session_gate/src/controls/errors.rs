use thiserror::Error;

use crate::api::ApiError;
use crate::session::SessionError;

/// Failure surfaced to the login form. The `Display` text is the message
/// the form shows the visitor.
#[derive(Debug, Error, Clone)]
pub enum LoginError {
    /// The service refused the credentials; carries the server-provided
    /// message or the generic fallback.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error. Please try again.")]
    Network,

    #[error("Unexpected response from server.")]
    UnexpectedResponse,

    /// The token could not be made durable.
    #[error("Unable to login. Please try again.")]
    Session(#[from] SessionError),
}

const REJECTED_FALLBACK: &str = "Unable to login. Please check your credentials.";

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { detail } => {
                Self::Rejected(detail.unwrap_or_else(|| REJECTED_FALLBACK.to_string()))
            }
            ApiError::Network(e) => {
                tracing::error!("Login failed: {}", e);
                Self::Network
            }
            ApiError::UnexpectedResponse => Self::UnexpectedResponse,
            // Not produced by the credential exchange.
            ApiError::ProfileUnavailable(_) => Self::UnexpectedResponse,
        }
    }
}
