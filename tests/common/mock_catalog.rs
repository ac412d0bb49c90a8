//! Mock catalog service for exercising the HTTP client.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A request as the service saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Serves queued responses in order; answers `[]` once the queue is empty.
pub struct MockCatalog {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockCatalog {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock catalog");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub async fn enqueue(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Base URL including the `/api/v1` prefix.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state
        .requests
        .lock()
        .await
        .push(CapturedRequest { method, path, body });

    let response = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::json("[]"));

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK))
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .unwrap()
}
