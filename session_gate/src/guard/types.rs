/// What the host should do with the current navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the page's children. The logout affordance is shown only for
    /// an authenticated visitor on a protected path in the interactive
    /// environment.
    Render { show_logout: bool },

    /// Authentication status is still unknown; render nothing (or a neutral
    /// placeholder). Rendering children here risks flashing protected
    /// content at an unauthenticated visitor.
    Placeholder,

    /// Perform a hard navigation to the given route and render nothing
    /// further. A full reload guarantees the target page starts from a
    /// clean session.
    Redirect { to: String },
}
