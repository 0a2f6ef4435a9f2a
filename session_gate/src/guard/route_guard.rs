use tokio::sync::broadcast::error::RecvError;

use crate::browser::{BrowserContext, RenderEnvironment};
use crate::session::SessionManager;

use super::policy::RoutePolicy;
use super::types::RouteDecision;

/// Decides, for every navigation, whether to render children or send the
/// visitor to the login page.
///
/// The guard is a pure function of its injected environment flag, the
/// session snapshot and the path; mounting any number of guards over one
/// session is safe and they all converge on the same decision.
pub struct RouteGuard {
    environment: RenderEnvironment,
    session: SessionManager,
    policy: RoutePolicy,
}

impl RouteGuard {
    pub fn new(context: &BrowserContext, session: SessionManager, policy: RoutePolicy) -> Self {
        Self {
            environment: context.environment(),
            session,
            policy,
        }
    }

    /// Decide the current navigation from the present session snapshot.
    pub fn evaluate(&self, path: &str) -> RouteDecision {
        // The build render has no trustworthy session signal: decide
        // nothing, emit the tree hydration will start from (children, no
        // affordance), and never redirect.
        if !self.environment.is_interactive() {
            return RouteDecision::Render { show_logout: false };
        }

        let session = self.session.snapshot();
        if !session.initialized {
            return RouteDecision::Placeholder;
        }

        let public = self.policy.is_public(path);
        match (session.is_authenticated(), public) {
            (true, false) => RouteDecision::Render { show_logout: true },
            // An authenticated visitor may still see the login page; no
            // redirect away from it.
            (true, true) => RouteDecision::Render { show_logout: false },
            (false, false) => {
                tracing::debug!(
                    "Unauthenticated on protected path '{}', redirecting to '{}'",
                    path,
                    self.policy.login_route()
                );
                RouteDecision::Redirect {
                    to: self.policy.login_route().to_string(),
                }
            }
            (false, true) => RouteDecision::Render { show_logout: false },
        }
    }

    /// Like [`evaluate`](Self::evaluate), but waits out the pending state:
    /// returns the first decision reached once the session has hydrated.
    pub async fn resolve(&self, path: &str) -> RouteDecision {
        loop {
            // Subscribe before evaluating so the settling event cannot slip
            // between the snapshot and the wait.
            let mut events = self.session.subscribe();

            let decision = self.evaluate(path);
            if decision != RouteDecision::Placeholder {
                return decision;
            }

            match events.recv().await {
                Ok(_) | Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return self.evaluate(path),
            }
        }
    }
}
