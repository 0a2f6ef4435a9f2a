use crate::config::SG_LOGIN_ROUTE;
use crate::session::{SessionError, SessionManager};

use super::types::Navigation;

/// Logout action page: sign out, then replace the current history entry
/// with the login page so "back" does not return to the action.
pub async fn sign_out(session: &SessionManager) -> Result<Navigation, SessionError> {
    session.logout().await?;
    Ok(Navigation::Replace(SG_LOGIN_ROUTE.clone()))
}

/// The guard's fixed logout affordance: sign out, then leave via a full
/// navigation so the login page starts from a clean session.
pub async fn sign_out_hard(session: &SessionManager) -> Result<Navigation, SessionError> {
    session.logout().await?;
    Ok(Navigation::Hard(SG_LOGIN_ROUTE.clone()))
}
