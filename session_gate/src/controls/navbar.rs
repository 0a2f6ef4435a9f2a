use crate::config::SG_LOGIN_ROUTE;
use crate::session::{Session, SessionError, SessionManager};

use super::types::{AuthButtonState, Navigation};

/// What the navbar auth item presents for a session snapshot: nothing until
/// the status is known, then Login or Logout.
pub fn auth_button(session: &Session) -> AuthButtonState {
    if !session.initialized {
        return AuthButtonState::Hidden;
    }
    if session.is_authenticated() {
        AuthButtonState::Logout
    } else {
        AuthButtonState::Login
    }
}

/// Handle a press of the navbar auth item. Signs out first when
/// authenticated; either way the visitor is taken to the login page.
pub async fn press_auth_button(session: &SessionManager) -> Result<Navigation, SessionError> {
    if session.is_authenticated() {
        session.logout().await?;
    }
    Ok(Navigation::Push(SG_LOGIN_ROUTE.clone()))
}
