use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials submitted to the credential-exchange endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Opaque bearer credential. Possession implies authentication; the
/// subsystem never inspects the contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Success body of the credential exchange.
#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub(super) access_token: Option<String>,
}

/// Failure body of the collaborator. `detail` is only surfaced when it is a
/// plain string; validation payloads come back as structured values.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub(super) detail: Option<Value>,
}

impl ErrorBody {
    pub(super) fn detail_message(self) -> Option<String> {
        self.detail
            .and_then(|value| value.as_str().map(str::to_string))
    }
}
