//! session_gate - Session store and route guard for statically generated
//! documentation sites
//!
//! This crate keeps a single source of truth for "who is logged in" across
//! an otherwise stateless page tree: a reactive session store hydrated from
//! a persistent token slot, a route gate that is safe in both the
//! non-interactive build render and the interactive browser render, and the
//! login/logout controls that mutate the session.

mod api;
mod browser;
mod config;
mod controls;
mod guard;
mod session;
mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

// Remote session collaborator
pub use api::{AUTH_API_URL, AccessToken, ApiError, AuthApi, HttpAuthApi, LoginRequest};

// Execution environment
pub use browser::{BrowserContext, RenderEnvironment, SignalHub};

// Route configuration
pub use config::{SG_LANDING_ROUTE, SG_LOGIN_ROUTE, SG_PUBLIC_PATHS};

// Auth controls
pub use controls::{
    AuthButtonState, LoginError, Navigation, auth_button, press_auth_button, sign_out,
    sign_out_hard, submit_login,
};

// Route guard
pub use guard::{RouteDecision, RouteGuard, RoutePolicy};

// Session state manager
pub use session::{
    SG_LOGOUT_SIGNAL, Session, SessionError, SessionEvent, SessionManager, SessionUser,
};

// Persistent token store
pub use storage::{
    InMemoryTokenStore, SG_TOKEN_STORAGE_KEY, StorageError, TokenStore, UnavailableTokenStore,
};
