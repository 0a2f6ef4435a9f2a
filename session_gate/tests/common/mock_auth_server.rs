//! Axum-based mock authentication service for integration tests.
//!
//! One seeded account, bearer tokens minted per login, and a switch to make
//! the profile endpoint refuse: enough to drive every guard and login flow
//! over real HTTP. Bound to an ephemeral port so tests stay isolated.

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

pub const TEST_EMAIL: &str = "a@x.com";
pub const TEST_PASSWORD: &str = "p";

pub struct MockAuthServer {
    base_url: Url,
    state: ServerState,
    _server: JoinHandle<()>,
}

#[derive(Clone)]
struct ServerState {
    inner: Arc<Mutex<ServerInner>>,
}

struct ServerInner {
    /// Tokens the profile endpoint will accept.
    valid_tokens: HashSet<String>,
    /// When false, /auth/me refuses even valid tokens.
    profile_available: bool,
    profile: Value,
}

impl MockAuthServer {
    pub async fn start() -> Self {
        let state = ServerState {
            inner: Arc::new(Mutex::new(ServerInner {
                valid_tokens: HashSet::new(),
                profile_available: true,
                profile: json!({
                    "id": "1",
                    "email": TEST_EMAIL,
                    "name": "A",
                }),
            })),
        };

        let app = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/me", get(me))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock auth server");
        let addr = listener.local_addr().expect("Mock server has no address");
        let base_url =
            Url::parse(&format!("http://{addr}")).expect("Mock server address is not a URL");

        let server = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock auth server exited");
        });

        Self {
            base_url,
            state,
            _server: server,
        }
    }

    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Make an externally minted token (e.g. one pre-seeded into a token
    /// store) acceptable to the profile endpoint.
    pub fn accept_token(&self, token: &str) {
        self.state
            .inner
            .lock()
            .unwrap()
            .valid_tokens
            .insert(token.to_string());
    }

    /// Toggle whether /auth/me answers at all.
    pub fn set_profile_available(&self, available: bool) {
        self.state.inner.lock().unwrap().profile_available = available;
    }
}

async fn login(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let email = body.get("email").and_then(Value::as_str);
    let password = body.get("password").and_then(Value::as_str);

    if email == Some(TEST_EMAIL) && password == Some(TEST_PASSWORD) {
        let token = Uuid::new_v4().to_string();
        state
            .inner
            .lock()
            .unwrap()
            .valid_tokens
            .insert(token.clone());
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

async fn me(State(state): State<ServerState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let inner = state.inner.lock().unwrap();
    match token {
        Some(token) if inner.profile_available && inner.valid_tokens.contains(token) => {
            (StatusCode::OK, Json(inner.profile.clone()))
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Not authenticated" })),
        ),
    }
}
