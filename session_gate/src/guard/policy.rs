use crate::config::{SG_LOGIN_ROUTE, SG_PUBLIC_PATHS};

/// Which paths may render without authentication.
///
/// Deny by default: a path is public only if it matches an allow-list entry
/// exactly or with a single optional trailing separator. Everything else is
/// protected.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    public_paths: Vec<String>,
    login_route: String,
}

impl RoutePolicy {
    pub fn new(
        public_paths: impl IntoIterator<Item = impl Into<String>>,
        login_route: impl Into<String>,
    ) -> Self {
        Self {
            public_paths: public_paths
                .into_iter()
                .map(|p| normalize(&p.into()))
                .collect(),
            login_route: login_route.into(),
        }
    }

    /// Policy from the configured allow-list and login route.
    pub fn from_env() -> Self {
        Self::new(SG_PUBLIC_PATHS.iter().cloned(), SG_LOGIN_ROUTE.as_str())
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths
            .iter()
            .any(|p| path == p.as_str() || path == format!("{p}/"))
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }
}

/// Allow-list entries are compared without their trailing separator so that
/// "/login" and "/login/" configure the same rule.
fn normalize(path: &str) -> String {
    if path.len() > 1 {
        path.trim_end_matches('/').to_string()
    } else {
        path.to_string()
    }
}
