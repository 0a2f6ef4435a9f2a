use std::sync::LazyLock;

use url::Url;

/// Base URL of the remote authentication service.
///
/// Resolved from the environment so local development and deployed hosts can
/// point at different services. Default: "http://localhost:8000"
pub static AUTH_API_URL: LazyLock<Url> = LazyLock::new(|| {
    let raw =
        std::env::var("AUTH_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    Url::parse(&raw).unwrap_or_else(|e| panic!("Invalid AUTH_API_URL '{raw}': {e}"))
});
