use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;

use crate::api::AuthApi;
use crate::browser::{BrowserContext, SignalHub};
use crate::session::config::SG_LOGOUT_SIGNAL;
use crate::session::errors::SessionError;
use crate::session::types::{Session, SessionEvent, SessionUser};
use crate::storage::TokenStore;

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// The single source of truth for "who is logged in" on one page load.
///
/// Cloning yields another handle to the same state; every guard and control
/// mounted on a page load must share one manager so that a mutation is
/// observed by all of them before the mutating call returns.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    state: RwLock<Session>,
    events: broadcast::Sender<SessionEvent>,
    store: Arc<dyn TokenStore>,
    signals: SignalHub,
    api: Arc<dyn AuthApi>,
    hydration_started: AtomicBool,
}

impl SessionManager {
    /// A fresh, uninitialized session for one page load in the given browser
    /// context.
    pub fn new(context: &BrowserContext, api: Arc<dyn AuthApi>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(SessionInner {
                state: RwLock::new(Session::default()),
                events,
                store: context.token_store(),
                signals: context.signals().clone(),
                api,
                hydration_started: AtomicBool::new(false),
            }),
        }
    }

    /// Hydrate the session from persistent storage. Runs once per page load,
    /// after the caller has confirmed the environment is interactive; later
    /// calls are no-ops.
    ///
    /// Authentication status is settled before this returns: a stored token
    /// authenticates immediately, and the profile fetch happens out of band.
    pub async fn initialize(&self) {
        if self.inner.hydration_started.swap(true, Ordering::SeqCst) {
            tracing::debug!("Session already initialized for this page load");
            return;
        }

        // A logout dispatched by another mounted instance in this browser
        // context unauthenticates this one without a reload.
        self.spawn_logout_listener();

        let stored = match self.inner.store.get().await {
            Ok(stored) => stored,
            Err(e) => {
                // Unreadable storage reads as "no stored token".
                tracing::warn!("Token hydration failed: {}", e);
                None
            }
        };

        {
            let mut state = self.write_state();
            state.token = stored.clone();
            state.initialized = true;
        }
        self.emit(SessionEvent::Initialized);

        if let Some(token) = stored {
            tracing::debug!("Hydrated bearer token from storage");
            self.spawn_profile_fetch(token);
        }
    }

    /// Make the token current: persist it, then update the in-memory session.
    /// When this returns Ok, `is_authenticated()` is true and the store holds
    /// the token. The profile fetch completes out of band.
    pub async fn login(&self, token: &str) -> Result<(), SessionError> {
        // Durable write first; on failure no in-memory state changes.
        self.inner.store.set(token).await?;

        {
            let mut state = self.write_state();
            state.token = Some(token.to_string());
        }
        tracing::info!("Session authenticated");
        self.emit(SessionEvent::LoggedIn);

        self.spawn_profile_fetch(token.to_string());
        Ok(())
    }

    /// Clear the store and the in-memory session, then signal every other
    /// mounted instance in this browser context. Idempotent.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.apply_logout().await?;
        self.inner.signals.publish(SG_LOGOUT_SIGNAL.as_str());
        Ok(())
    }

    /// Current session state. Reads are synchronous: once a mutation call has
    /// returned, every consumer observes the new state.
    pub fn snapshot(&self) -> Session {
        self.read_state().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().token.is_some()
    }

    /// Observe session mutations. Every `initialize`/`login`/`logout` and
    /// each applied profile emits one event; observers re-read the snapshot.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// The clear half of logout, shared with external-signal delivery. Does
    /// not re-publish, so signal fan-out cannot loop.
    async fn apply_logout(&self) -> Result<(), SessionError> {
        self.inner.store.clear().await?;

        let was_authenticated = {
            let mut state = self.write_state();
            let had_token = state.token.is_some();
            state.token = None;
            // A null token implies no user.
            state.user = None;
            had_token
        };

        if was_authenticated {
            tracing::info!("Session unauthenticated");
            self.emit(SessionEvent::LoggedOut);
        } else {
            tracing::debug!("Logout on an unauthenticated session; nothing to do");
        }
        Ok(())
    }

    fn spawn_logout_listener(&self) {
        let mut rx = self.inner.signals.subscribe(SG_LOGOUT_SIGNAL.as_str());
        let manager = self.clone();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(()) => {
                        tracing::debug!("External logout signal received");
                        if let Err(e) = manager.apply_logout().await {
                            tracing::warn!("Failed to apply external logout: {}", e);
                        }
                    }
                    // The only signal on this channel is logout, so missed
                    // deliveries collapse into one application.
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::debug!("Logout listener lagged by {} signal(s)", skipped);
                        if let Err(e) = manager.apply_logout().await {
                            tracing::warn!("Failed to apply external logout: {}", e);
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }

    /// Best-effort profile hydration. Failure is logged and swallowed; it
    /// never downgrades authentication status.
    fn spawn_profile_fetch(&self, token: String) {
        let manager = self.clone();
        tokio::spawn(async move {
            match manager.inner.api.fetch_profile(&token).await {
                Ok(user) => manager.apply_profile(&token, user),
                Err(e) => {
                    tracing::warn!("Profile hydration failed: {}", e);
                }
            }
        });
    }

    /// Apply a fetched profile if the token it was fetched for is still
    /// current. A stale fetch completing after logout or a newer login must
    /// not resurrect the user field.
    pub(crate) fn apply_profile(&self, fetched_for: &str, user: SessionUser) {
        let applied = {
            let mut state = self.write_state();
            if state.token.as_deref() == Some(fetched_for) {
                state.user = Some(user);
                true
            } else {
                false
            }
        };

        if applied {
            tracing::debug!("Profile hydrated");
            self.emit(SessionEvent::ProfileLoaded);
        } else {
            tracing::debug!("Discarding profile for a token that is no longer current");
        }
    }

    fn emit(&self, event: SessionEvent) {
        // No receivers is fine; state is always re-readable.
        let _ = self.inner.events.send(event);
    }

    fn read_state(&self) -> RwLockReadGuard<'_, Session> {
        // A poisoned lock still holds a consistent snapshot; the state is
        // only ever mutated as a whole.
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
