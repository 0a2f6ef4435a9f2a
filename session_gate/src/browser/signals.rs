use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast;

/// Buffered signals per channel; receivers that fall further behind observe
/// a lag and simply re-check state, so a small buffer is enough.
const SIGNAL_CHANNEL_CAPACITY: usize = 16;

/// Named broadcast channels scoped to one browser context.
///
/// Signals are addressed by namespaced names ("session-gate:logout") so the
/// hub can be shared with unrelated publishers without collisions. Cloning
/// the hub yields another handle to the same channels.
#[derive(Clone)]
pub struct SignalHub {
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<()>>>>,
}

impl SignalHub {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn sender(&self, signal: &str) -> broadcast::Sender<()> {
        // A poisoned lock still holds valid channel handles.
        let mut channels = self
            .channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        channels
            .entry(signal.to_string())
            .or_insert_with(|| broadcast::channel(SIGNAL_CHANNEL_CAPACITY).0)
            .clone()
    }

    /// Subscribe to a named signal. Signals published before subscription are
    /// not observed.
    pub fn subscribe(&self, signal: &str) -> broadcast::Receiver<()> {
        self.sender(signal).subscribe()
    }

    /// Dispatch a named signal to every current subscriber in this context.
    /// Returns the number of subscribers reached; dispatching with nobody
    /// listening is not an error.
    pub fn publish(&self, signal: &str) -> usize {
        let reached = self.sender(signal).send(()).unwrap_or(0);
        tracing::debug!("Signal '{}' reached {} subscriber(s)", signal, reached);
        reached
    }
}

impl Default for SignalHub {
    fn default() -> Self {
        Self::new()
    }
}
