use crate::api::{AuthApi, LoginRequest};
use crate::config::SG_LANDING_ROUTE;
use crate::session::SessionManager;

use super::errors::LoginError;
use super::types::Navigation;

/// Login control: exchange the submitted credentials, authenticate the
/// session, and hand back the landing navigation.
///
/// Never partially authenticates: on any failure the session and the token
/// store are left untouched and the error's `Display` text is what the form
/// should show.
pub async fn submit_login(
    session: &SessionManager,
    api: &dyn AuthApi,
    request: &LoginRequest,
) -> Result<Navigation, LoginError> {
    let token = api.exchange_credentials(request).await?;
    session.login(token.as_str()).await?;
    tracing::debug!("Login submitted for '{}' succeeded", request.email);
    Ok(Navigation::Push(SG_LANDING_ROUTE.clone()))
}
