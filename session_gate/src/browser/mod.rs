mod context;
mod signals;
mod types;

pub use signals::SignalHub;
pub use types::{BrowserContext, RenderEnvironment};
