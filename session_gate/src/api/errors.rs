use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// The credential exchange was refused. Carries the service's
    /// human-readable `detail` message when one was provided.
    #[error("Login rejected by the authentication service")]
    Rejected { detail: Option<String> },

    /// The request never completed: connection refused, timeout, DNS.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not carry the expected fields.
    #[error("Unexpected response from the authentication service")]
    UnexpectedResponse,

    /// The profile endpoint declined the token. This means "no profile
    /// available", never "logged out".
    #[error("Profile unavailable: {0}")]
    ProfileUnavailable(String),
}
