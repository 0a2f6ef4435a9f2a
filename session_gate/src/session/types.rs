use serde::{Deserialize, Serialize};

/// Profile of the signed-in visitor, hydrated best-effort from the remote
/// collaborator. Advisory only: authentication status never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Snapshot of the session at one instant of a page load.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Opaque bearer credential; absence means unauthenticated.
    pub token: Option<String>,
    /// May lag or stay absent while `token` is present; never present
    /// without `token`.
    pub user: Option<SessionUser>,
    /// True once the single hydration attempt for this page load completed.
    /// Until then the authentication status is unknown, not "logged out".
    pub initialized: bool,
}

impl Session {
    /// Authentication is defined solely by token presence.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Change notification for session observers. Events carry no payload;
/// observers re-read the snapshot, so a lagging receiver only ever acts on
/// current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The hydration attempt for this page load completed.
    Initialized,
    LoggedIn,
    LoggedOut,
    /// The best-effort profile arrived for the current token.
    ProfileLoaded,
}
