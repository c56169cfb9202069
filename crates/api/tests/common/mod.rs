use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use outreach_api::completion::CompletionClient;
use outreach_api::config::{OpenAiConfig, ServerConfig};
use outreach_api::routes;
use outreach_api::state::AppState;

/// Build a test `ServerConfig` pointing the completion client at the
/// given base URL (normally a [`StubCompletions`] server).
pub fn test_config(completion_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        openai: OpenAiConfig {
            api_key: "test-key".to_string(),
            base_url: completion_base_url.to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 150,
        },
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(completion_base_url: &str) -> Router {
    let config = test_config(completion_base_url);
    let completion = CompletionClient::new(config.openai.clone());

    let state = AppState { completion };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
#[allow(dead_code)]
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body against the app.
#[allow(dead_code)]
pub async fn post_json(app: Router, path: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Stub completion service
// ---------------------------------------------------------------------------

/// Canned behaviour for the stub chat-completions endpoint.
#[allow(dead_code)]
#[derive(Clone)]
pub enum StubBehavior {
    /// Reply 200 with a single choice containing this text.
    Reply(String),
    /// Reply 200 with no choices at all.
    NoChoices,
    /// Reply 429 with an `insufficient_quota` error body.
    QuotaExhausted,
    /// Reply 500 with an opaque error body.
    ServerError,
}

#[derive(Clone)]
struct StubState {
    behavior: StubBehavior,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// A local stand-in for the chat-completions collaborator.
///
/// Records every request body it receives so tests can assert on the
/// forwarded prompt.
pub struct StubCompletions {
    /// Base URL to hand to [`test_config`].
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubCompletions {
    /// Spawn the stub on an ephemeral port.
    #[allow(dead_code)]
    pub async fn spawn(behavior: StubBehavior) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            behavior,
            requests: Arc::clone(&requests),
        };

        let router = Router::new()
            .route("/chat/completions", post(stub_completions_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Request bodies received so far.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn stub_completions_handler(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> Response {
    state.requests.lock().unwrap().push(body);

    let (status, body) = match &state.behavior {
        StubBehavior::Reply(text) => (
            StatusCode::OK,
            json!({
                "choices": [
                    { "message": { "role": "assistant", "content": text } }
                ]
            }),
        ),
        StubBehavior::NoChoices => (StatusCode::OK, json!({ "choices": [] })),
        StubBehavior::QuotaExhausted => (
            StatusCode::TOO_MANY_REQUESTS,
            json!({
                "error": {
                    "message": "You exceeded your current quota.",
                    "type": "insufficient_quota",
                    "code": "insufficient_quota"
                }
            }),
        ),
        StubBehavior::ServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": { "message": "The server had an error." } }),
        ),
    };

    (status, Json(body)).into_response()
}
