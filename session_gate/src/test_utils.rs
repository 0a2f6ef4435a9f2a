//! Shared test doubles for unit tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::{AccessToken, ApiError, AuthApi, LoginRequest};
use crate::session::SessionUser;

/// Remote collaborator double with canned responses for both endpoints.
pub(crate) struct MockAuthApi {
    exchange: Result<String, ApiError>,
    profile: Result<SessionUser, ApiError>,
}

impl MockAuthApi {
    pub(crate) fn succeeding(token: &str, user: SessionUser) -> Arc<Self> {
        Arc::new(Self {
            exchange: Ok(token.to_string()),
            profile: Ok(user),
        })
    }

    /// Exchange succeeds, profile endpoint refuses.
    pub(crate) fn without_profile(token: &str) -> Arc<Self> {
        Arc::new(Self {
            exchange: Ok(token.to_string()),
            profile: Err(ApiError::ProfileUnavailable("401 Unauthorized".into())),
        })
    }

    pub(crate) fn rejecting(detail: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            exchange: Err(ApiError::Rejected {
                detail: detail.map(str::to_string),
            }),
            profile: Err(ApiError::ProfileUnavailable("401 Unauthorized".into())),
        })
    }

    pub(crate) fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            exchange: Err(ApiError::Network("connection refused".into())),
            profile: Err(ApiError::Network("connection refused".into())),
        })
    }

    pub(crate) fn malformed() -> Arc<Self> {
        Arc::new(Self {
            exchange: Err(ApiError::UnexpectedResponse),
            profile: Err(ApiError::ProfileUnavailable("401 Unauthorized".into())),
        })
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn exchange_credentials(
        &self,
        _request: &LoginRequest,
    ) -> Result<AccessToken, ApiError> {
        self.exchange.clone().map(AccessToken::new)
    }

    async fn fetch_profile(&self, _token: &str) -> Result<SessionUser, ApiError> {
        self.profile.clone()
    }
}

pub(crate) fn test_user() -> SessionUser {
    SessionUser {
        id: "1".to_string(),
        email: "a@x.com".to_string(),
        name: "A".to_string(),
    }
}
