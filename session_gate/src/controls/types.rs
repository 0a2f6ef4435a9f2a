/// Navigation the host should perform after a control completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Soft in-app transition pushing a history entry.
    Push(String),
    /// Soft transition replacing the current history entry.
    Replace(String),
    /// Full page navigation; the target page starts from a clean session.
    Hard(String),
}

impl Navigation {
    pub fn route(&self) -> &str {
        match self {
            Navigation::Push(route) | Navigation::Replace(route) | Navigation::Hard(route) => {
                route
            }
        }
    }
}

/// What the navbar auth item presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthButtonState {
    /// Authentication status unknown; render nothing yet.
    Hidden,
    /// Offer navigation to the login page.
    Login,
    /// Offer signing out.
    Logout,
}
