use std::sync::Arc;

use crate::storage::TokenStore;

use super::signals::SignalHub;

/// Capability flag for the environment a render pass executes in.
///
/// The flag is injected into every component that behaves differently across
/// render passes; nothing in the crate sniffs its environment at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEnvironment {
    /// Non-interactive build render: no persistent storage, no events, no
    /// navigation. Output must match what the interactive render would
    /// produce before hydration.
    Build,
    /// Live browser render with storage and events available.
    Interactive,
}

impl RenderEnvironment {
    pub fn is_interactive(self) -> bool {
        matches!(self, RenderEnvironment::Interactive)
    }
}

/// One browser context: the persistent token slot and the signal hub shared
/// by every page load and UI fragment running in it.
///
/// Cloning the context does not copy state; all clones observe the same
/// store and the same signals.
#[derive(Clone)]
pub struct BrowserContext {
    pub(super) environment: RenderEnvironment,
    pub(super) store: Arc<dyn TokenStore>,
    pub(super) signals: SignalHub,
}
