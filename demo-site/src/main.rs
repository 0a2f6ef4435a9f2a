//! Walkthrough of the session-gate subsystem against an embedded auth
//! service: build render, hydration, login, a simulated reload, and a
//! fan-out logout across two mounted instances.

use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use tokio::time::timeout;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_gate::{
    BrowserContext, HttpAuthApi, LoginRequest, RouteGuard, RoutePolicy, SessionEvent,
    SessionManager, press_auth_button, submit_login,
};

mod server;

use crate::server::{DEMO_EMAIL, DEMO_PASSWORD, spawn_auth_server};

const PROTECTED_PATH: &str = "/docs/intro";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("{}=debug,session_gate=debug", env!("CARGO_CRATE_NAME")).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (base_url, _auth_server) = spawn_auth_server().await?;
    let api = Arc::new(HttpAuthApi::new(base_url));
    let policy = RoutePolicy::from_env();

    // 1. The build render: no storage, no redirects, no affordance.
    let build_ctx = BrowserContext::build();
    let build_session = SessionManager::new(&build_ctx, api.clone());
    let build_guard = RouteGuard::new(&build_ctx, build_session, policy.clone());
    tracing::info!(
        "Build render of {}: {:?}",
        PROTECTED_PATH,
        build_guard.evaluate(PROTECTED_PATH)
    );

    // 2. A fresh interactive load with an empty store ends in a redirect.
    let ctx = BrowserContext::interactive_in_memory();
    let session = SessionManager::new(&ctx, api.clone());
    let guard = RouteGuard::new(&ctx, session.clone(), policy.clone());
    tracing::info!(
        "Before hydration: {:?}",
        guard.evaluate(PROTECTED_PATH)
    );
    session.initialize().await;
    tracing::info!(
        "After hydration without a token: {:?}",
        guard.evaluate(PROTECTED_PATH)
    );

    // 3. The login form authenticates the session and lands on /docs/.
    let mut events = session.subscribe();
    let credentials = LoginRequest {
        email: DEMO_EMAIL.to_string(),
        password: DEMO_PASSWORD.to_string(),
    };
    let navigation = submit_login(&session, api.as_ref(), &credentials).await?;
    tracing::info!("Login succeeded, navigating via {:?}", navigation);
    tracing::info!(
        "After login: {:?}",
        guard.evaluate(PROTECTED_PATH)
    );

    // The profile arrives out of band and never gates authentication.
    loop {
        match timeout(Duration::from_secs(5), events.recv()).await {
            Ok(Ok(SessionEvent::ProfileLoaded)) => break,
            Ok(Ok(_)) => continue,
            _ => {
                tracing::warn!("Profile did not hydrate; continuing without one");
                break;
            }
        }
    }
    if let Some(user) = session.snapshot().user {
        tracing::info!("Signed in as {} <{}>", user.name, user.email);
    }

    // 4. A reload: a fresh page load over the same context hydrates the
    // persisted token.
    let reload = SessionManager::new(&ctx, api.clone());
    reload.initialize().await;
    tracing::info!(
        "Reloaded page is authenticated: {}",
        reload.is_authenticated()
    );

    // 5. The navbar on the reloaded page signs out; the original page's
    // guard observes the fan-out and redirects.
    let mut original_events = session.subscribe();
    let navigation = press_auth_button(&reload).await?;
    tracing::info!("Navbar sign-out, navigating via {:?}", navigation);
    loop {
        match timeout(Duration::from_secs(5), original_events.recv()).await {
            Ok(Ok(SessionEvent::LoggedOut)) => break,
            Ok(Ok(_)) => continue,
            _ => {
                tracing::warn!("Fan-out logout was not observed");
                break;
            }
        }
    }
    tracing::info!(
        "Original page after fan-out logout: {:?}",
        guard.evaluate(PROTECTED_PATH)
    );

    Ok(())
}
