use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::session::SessionUser;

use super::config::AUTH_API_URL;
use super::errors::ApiError;
use super::types::{AccessToken, ErrorBody, LoginRequest, TokenResponse};

/// The remote session collaborator: exchanges credentials for a bearer token
/// and resolves a token into a user profile.
#[async_trait]
pub trait AuthApi: Send + Sync + 'static {
    /// POST the credentials to the login endpoint. Any 2xx with an
    /// `access_token` succeeds; everything else is an error, never a partial
    /// authentication.
    async fn exchange_credentials(
        &self,
        request: &LoginRequest,
    ) -> Result<AccessToken, ApiError>;

    /// GET the profile for a bearer token. A refusal means "no profile
    /// available" and must not be treated as a logout.
    async fn fetch_profile(&self, token: &str) -> Result<SessionUser, ApiError>;
}

pub struct HttpAuthApi {
    base: Url,
    client: reqwest::Client,
}

/// Creates a configured HTTP client for collaborator calls.
///
/// - `timeout`: 10 seconds, so a stalled service degrades into a retryable
///   network failure instead of hanging the login form.
fn get_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create reqwest client")
}

impl HttpAuthApi {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: get_client(),
        }
    }

    /// Client pointed at the environment-resolved service base URL.
    pub fn from_env() -> Self {
        Self::new(AUTH_API_URL.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn exchange_credentials(
        &self,
        request: &LoginRequest,
    ) -> Result<AccessToken, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/auth/login"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(ErrorBody::detail_message);
            tracing::debug!(
                "Credential exchange refused with {}: {:?}",
                status,
                detail
            );
            return Err(ApiError::Rejected { detail });
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            tracing::debug!("Malformed credential exchange body: {}", e);
            ApiError::UnexpectedResponse
        })?;

        match body.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
            _ => Err(ApiError::UnexpectedResponse),
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<SessionUser, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/auth/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::ProfileUnavailable(status.to_string()));
        }

        response
            .json::<SessionUser>()
            .await
            .map_err(|e| ApiError::ProfileUnavailable(format!("malformed profile body: {e}")))
    }
}
