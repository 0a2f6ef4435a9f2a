//! End-to-end login/logout control flows against the mock service.

use std::sync::Arc;
use std::time::Duration;

use session_gate::{
    BrowserContext, HttpAuthApi, LoginRequest, Navigation, RouteDecision, RouteGuard, RoutePolicy,
    SessionEvent, SessionManager, sign_out, submit_login,
};
use tokio::time::timeout;
use url::Url;

use crate::common::mock_auth_server::{TEST_EMAIL, TEST_PASSWORD};
use crate::common::{MockAuthServer, init_test_tracing};

fn policy() -> RoutePolicy {
    RoutePolicy::new(["/login"], "/login")
}

fn good_credentials() -> LoginRequest {
    LoginRequest {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

#[tokio::test]
async fn scenario_successful_login_lands_on_protected_route() {
    init_test_tracing();
    let server = MockAuthServer::start().await;

    // Given a hydrated, unauthenticated page load
    let ctx = BrowserContext::interactive_in_memory();
    let api = Arc::new(HttpAuthApi::new(server.base_url()));
    let session = SessionManager::new(&ctx, api.clone());
    session.initialize().await;
    let guard = RouteGuard::new(&ctx, session.clone(), policy());
    let mut events = session.subscribe();

    // When the login form submits valid credentials
    let navigation = submit_login(&session, api.as_ref(), &good_credentials())
        .await
        .expect("login should succeed");

    // Then the visitor is sent to the default protected route
    assert_eq!(navigation, Navigation::Push("/docs/".to_string()));

    // And the store holds the freshly minted token
    let token = session.snapshot().token.expect("session should hold a token");
    assert!(!token.is_empty());
    assert_eq!(ctx.token_store().get().await.unwrap(), Some(token));

    // And the guard renders the landing page without a redirect
    assert_eq!(
        guard.evaluate("/docs/"),
        RouteDecision::Render { show_logout: true }
    );

    // And the profile hydrates out of band
    loop {
        match timeout(Duration::from_secs(5), events.recv()).await {
            Ok(Ok(SessionEvent::ProfileLoaded)) => break,
            Ok(Ok(_)) => continue,
            _ => panic!("profile never hydrated"),
        }
    }
    assert_eq!(session.snapshot().user.unwrap().name, "A");
}

#[tokio::test]
async fn scenario_rejected_credentials_surface_the_server_detail() {
    init_test_tracing();
    let server = MockAuthServer::start().await;

    // Given a hydrated, unauthenticated page load
    let ctx = BrowserContext::interactive_in_memory();
    let api = Arc::new(HttpAuthApi::new(server.base_url()));
    let session = SessionManager::new(&ctx, api.clone());
    session.initialize().await;

    // When the login form submits invalid credentials
    let request = LoginRequest {
        email: TEST_EMAIL.to_string(),
        password: "wrong".to_string(),
    };
    let err = submit_login(&session, api.as_ref(), &request)
        .await
        .expect_err("login should be rejected");

    // Then the form shows the service's message and nothing was mutated
    assert_eq!(err.to_string(), "bad credentials");
    assert!(!session.is_authenticated());
    assert_eq!(ctx.token_store().get().await.unwrap(), None);
}

#[tokio::test]
async fn scenario_unreachable_service_surfaces_a_retryable_message() {
    init_test_tracing();

    // Given a collaborator nothing listens on
    let ctx = BrowserContext::interactive_in_memory();
    let api = Arc::new(HttpAuthApi::new(
        Url::parse("http://127.0.0.1:9").unwrap(),
    ));
    let session = SessionManager::new(&ctx, api.clone());
    session.initialize().await;

    // When the login form submits
    let err = submit_login(&session, api.as_ref(), &good_credentials())
        .await
        .expect_err("login should fail");

    // Then the generic retryable message is surfaced and nothing was mutated
    assert_eq!(err.to_string(), "Network error. Please try again.");
    assert!(!session.is_authenticated());
    assert_eq!(ctx.token_store().get().await.unwrap(), None);
}

#[tokio::test]
async fn scenario_logout_page_clears_the_session_and_redirects() {
    init_test_tracing();
    let server = MockAuthServer::start().await;

    // Given an authenticated page load
    let ctx = BrowserContext::interactive_in_memory();
    let api = Arc::new(HttpAuthApi::new(server.base_url()));
    let session = SessionManager::new(&ctx, api.clone());
    session.initialize().await;
    submit_login(&session, api.as_ref(), &good_credentials())
        .await
        .expect("login should succeed");
    let guard = RouteGuard::new(&ctx, session.clone(), policy());

    // When the logout action page runs
    let navigation = sign_out(&session).await.expect("logout should succeed");

    // Then the visitor is replaced onto the login page with a clean store
    assert_eq!(navigation, Navigation::Replace("/login".to_string()));
    assert!(!session.is_authenticated());
    assert_eq!(ctx.token_store().get().await.unwrap(), None);
    assert_eq!(
        guard.evaluate("/docs/intro"),
        RouteDecision::Redirect {
            to: "/login".to_string()
        }
    );
}
