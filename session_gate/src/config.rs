//! Central route configuration for the session-gate crate

use std::sync::LazyLock;

/// Route of the login page.
///
/// The one place unauthenticated visitors are sent to. Default: "/login"
pub static SG_LOGIN_ROUTE: LazyLock<String> =
    LazyLock::new(|| std::env::var("SG_LOGIN_ROUTE").unwrap_or_else(|_| "/login".to_string()));

/// Default protected route a successful login lands on. Default: "/docs/"
pub static SG_LANDING_ROUTE: LazyLock<String> =
    LazyLock::new(|| std::env::var("SG_LANDING_ROUTE").unwrap_or_else(|_| "/docs/".to_string()));

/// Comma-separated allow-list of public paths. Everything not listed is
/// protected; the policy is deny by default. Default: the login route.
pub static SG_PUBLIC_PATHS: LazyLock<Vec<String>> = LazyLock::new(|| {
    std::env::var("SG_PUBLIC_PATHS")
        .unwrap_or_else(|_| "/login".to_string())
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
});
