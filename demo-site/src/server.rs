//! Embedded authentication service the demo runs against.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;
use uuid::Uuid;

pub(crate) const DEMO_EMAIL: &str = "reader@example.com";
pub(crate) const DEMO_PASSWORD: &str = "letmein";

#[derive(Clone, Default)]
struct AuthState {
    issued: Arc<Mutex<HashSet<String>>>,
}

/// Bind the auth service to an ephemeral local port and serve it in the
/// background. Returns the base URL the client should talk to.
pub(crate) async fn spawn_auth_server() -> Result<(Url, JoinHandle<()>), Box<dyn std::error::Error>>
{
    let state = AuthState::default();
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let base_url = Url::parse(&format!("http://{addr}"))?;
    tracing::debug!("Auth service listening on {}", addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Auth service exited: {}", e);
        }
    });

    Ok((base_url, handle))
}

async fn login(
    State(state): State<AuthState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let email = body.get("email").and_then(Value::as_str);
    let password = body.get("password").and_then(Value::as_str);

    if email == Some(DEMO_EMAIL) && password == Some(DEMO_PASSWORD) {
        let token = Uuid::new_v4().to_string();
        state.issued.lock().unwrap().insert(token.clone());
        (
            StatusCode::OK,
            Json(json!({ "access_token": token, "token_type": "bearer" })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "bad credentials" })),
        )
    }
}

async fn me(State(state): State<AuthState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) if state.issued.lock().unwrap().contains(token) => (
            StatusCode::OK,
            Json(json!({
                "id": "1",
                "email": DEMO_EMAIL,
                "name": "Demo Reader",
            })),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Not authenticated" })),
        ),
    }
}
