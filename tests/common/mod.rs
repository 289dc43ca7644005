//! In-process stand-in for the Langflow run endpoint.

use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::{
        HeaderMap, Request, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE, HeaderName},
    },
    response::{IntoResponse, Response},
    routing::post,
};
use langflow_chat::{config::RelayConfig, routes::create_router, state::AppState};
use serde_json::Value;
use tokio::{net::TcpListener, sync::Mutex};
use tower::util::ServiceExt;

pub const RUN_PATH: &str = "/api/v1/run/test-flow";

#[derive(Clone)]
pub enum MockReply {
    Json(Value),
    Status(StatusCode),
    Raw(&'static str),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

struct MockState {
    reply: MockReply,
    calls: AtomicUsize,
    last: Mutex<Option<RecordedRequest>>,
}

pub struct MockLangflow {
    addr: SocketAddr,
    state: Arc<MockState>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockLangflow {
    pub async fn start(reply: MockReply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = Arc::new(MockState {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        });

        let app = Router::new()
            .route(RUN_PATH, post(mock_run))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            _handle: handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, RUN_PATH)
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.state.last.lock().await.clone()
    }
}

async fn mock_run(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.calls.fetch_add(1, Ordering::SeqCst);

    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    *state.last.lock().await = Some(RecordedRequest {
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    match &state.reply {
        MockReply::Json(value) => axum::Json(value.clone()).into_response(),
        MockReply::Status(status) => (*status, "upstream unavailable").into_response(),
        MockReply::Raw(text) => (StatusCode::OK, *text).into_response(),
    }
}

pub fn app_with(config: RelayConfig) -> Router {
    create_router().with_state(Arc::new(AppState::new(config)))
}

pub fn app_for(mock: &MockLangflow) -> Router {
    app_with(RelayConfig::new(mock.url(), "test-key"))
}

/// POST a raw body and decode the JSON answer.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}
