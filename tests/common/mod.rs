//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::Router;
use tokio::net::TcpListener;

/// One request seen by a [`MockBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Programmable backend listening on an ephemeral port.
pub struct MockBackend {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a backend answering every request with `respond(&request)`.
pub async fn start_backend<F>(respond: F) -> MockBackend
where
    F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let respond = Arc::new(respond);

    let recorded = requests.clone();
    let app = Router::new().fallback(move |request: Request| {
        let recorded = recorded.clone();
        let respond = respond.clone();
        async move {
            let method = request.method().to_string();
            let path = request
                .uri()
                .path_and_query()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default();
            let content_type = request
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let bytes = to_bytes(request.into_body(), usize::MAX).await.unwrap();

            let request = RecordedRequest {
                method,
                path,
                content_type,
                body: String::from_utf8(bytes.to_vec()).unwrap(),
            };
            let (status, body) = respond(&request);
            recorded.lock().unwrap().push(request);

            (StatusCode::from_u16(status).unwrap(), body)
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend { addr, requests }
}

/// Start a backend answering every request with the same status and body.
#[allow(dead_code)]
pub async fn start_fixed_backend(status: u16, body: &'static str) -> MockBackend {
    start_backend(move |_| (status, body.to_string())).await
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
