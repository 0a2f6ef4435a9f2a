use std::sync::Arc;

use crate::storage::{InMemoryTokenStore, TokenStore, UnavailableTokenStore};

use super::signals::SignalHub;
use super::types::{BrowserContext, RenderEnvironment};

impl BrowserContext {
    /// An interactive browser context over an explicit token store. Page
    /// loads constructed from clones of this context share the store and the
    /// signal hub.
    pub fn interactive(store: Arc<dyn TokenStore>) -> Self {
        Self {
            environment: RenderEnvironment::Interactive,
            store,
            signals: SignalHub::new(),
        }
    }

    /// An interactive context with a fresh in-memory token slot.
    pub fn interactive_in_memory() -> Self {
        Self::interactive(Arc::new(InMemoryTokenStore::new()))
    }

    /// The non-interactive build render environment: no persistent storage,
    /// no observable signals. Reads succeed and yield nothing.
    pub fn build() -> Self {
        Self {
            environment: RenderEnvironment::Build,
            store: Arc::new(UnavailableTokenStore::new()),
            signals: SignalHub::new(),
        }
    }

    pub fn environment(&self) -> RenderEnvironment {
        self.environment
    }

    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }

    pub fn signals(&self) -> &SignalHub {
        &self.signals
    }
}
