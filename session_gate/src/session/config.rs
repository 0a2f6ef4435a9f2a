use std::sync::LazyLock;

/// Name of the logout signal dispatched to every mounted instance in the
/// same browser context.
///
/// Namespaced so sharing a signal hub with unrelated publishers cannot
/// collide. Default: "session-gate:logout"
pub static SG_LOGOUT_SIGNAL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SG_LOGOUT_SIGNAL").unwrap_or_else(|_| "session-gate:logout".to_string())
});
