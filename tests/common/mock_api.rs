//! Mock gallery backend for testing store/client behavior.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// `"GET /api/tags"` style summary, without the query string.
    pub fn line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Hold the response back this long; lets tests overlap requests.
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    /// List response with pagination headers the way the backend sends them.
    pub fn list(items: serde_json::Value, total: u64, link: &str) -> Self {
        let mut resp = Self::json(items);
        resp.headers
            .push(("x-total-count".to_string(), total.to_string()));
        if !link.is_empty() {
            resp.headers.push(("link".to_string(), link.to_string()));
        }
        resp
    }

    pub fn created(body: serde_json::Value) -> Self {
        let mut resp = Self::json(body);
        resp.status = 201;
        resp
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            headers: Vec::new(),
            body: Vec::new(),
            delay_ms: 0,
        }
    }

    pub fn problem(status: u16, detail: &str) -> Self {
        Self {
            status,
            headers: vec![(
                "content-type".to_string(),
                "application/problem+json".to_string(),
            )],
            body: serde_json::json!({ "title": "error", "detail": detail })
                .to_string()
                .into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn field_errors(status: u16, detail: &str, errors: serde_json::Value) -> Self {
        let mut resp = Self::problem(status, detail);
        resp.body = serde_json::json!({
            "title": "error",
            "detail": detail,
            "fieldErrors": errors,
        })
        .to_string()
        .into_bytes();
        resp
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock backend server for testing.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    /// Start a new mock backend server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let router = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock api");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .expect("mock api server failed");
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Base URL including the `/api` prefix, as configured in [`ApiConfig`].
    ///
    /// [`ApiConfig`]: lightbox::config::ApiConfig
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub async fn enqueue(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Method+path summaries of every captured request, in order.
    pub async fn request_lines(&self) -> Vec<String> {
        self.captured_requests()
            .await
            .iter()
            .map(CapturedRequest::line)
            .collect()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or_default().to_string();
    let body = axum::body::to_bytes(req.into_body(), usize::MAX)
        .await
        .map(|bytes| bytes.to_vec())
        .unwrap_or_default();

    state.requests.lock().await.push(CapturedRequest {
        method,
        path,
        query,
        body,
    });

    let Some(mock) = state.responses.lock().await.pop_front() else {
        return Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from("no mock response enqueued"))
            .unwrap();
    };

    if mock.delay_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(mock.delay_ms)).await;
    }

    let mut builder = Response::builder().status(mock.status);
    for (name, value) in &mock.headers {
        builder = builder.header(name, value);
    }
    builder.body(Body::from(mock.body)).unwrap()
}
