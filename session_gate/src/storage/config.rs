use std::sync::LazyLock;

/// Storage key under which the bearer token is persisted.
///
/// A single slot per browser context; nothing else in the subsystem touches
/// the persistent store. Default: "sg_auth_token"
pub static SG_TOKEN_STORAGE_KEY: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SG_TOKEN_STORAGE_KEY").unwrap_or_else(|_| "sg_auth_token".to_string())
});
