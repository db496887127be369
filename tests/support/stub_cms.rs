// tests/support/stub_cms.rs
//! In-process stand-in for the CMS, served by axum on an ephemeral port.
use axum::{
    Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    routing::get,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
}

pub struct StubCms {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubCms {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serve `body` with `status` on `GET /api/articles`.
pub async fn spawn_stub_cms(status: StatusCode, body: impl Into<String>) -> StubCms {
    spawn_slow_stub_cms(status, body, Duration::ZERO).await
}

/// Like [`spawn_stub_cms`] but waits `delay` before answering.
pub async fn spawn_slow_stub_cms(
    status: StatusCode,
    body: impl Into<String>,
    delay: Duration,
) -> StubCms {
    let body: String = body.into();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);

    let app = Router::new().route(
        "/api/articles",
        get(
            move |Query(query): Query<HashMap<String, String>>, headers: HeaderMap| {
                let recorded = Arc::clone(&recorded);
                let body = body.clone();
                async move {
                    recorded.lock().unwrap().push(RecordedRequest {
                        query,
                        authorization: headers
                            .get(header::AUTHORIZATION)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string),
                    });
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            },
        ),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub cms");
    let addr = listener.local_addr().expect("stub cms addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub cms server");
    });

    StubCms {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind placeholder listener");
    let addr = listener.local_addr().expect("placeholder addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn cms_list_body() -> String {
    serde_json::json!({
        "data": [
            {
                "id": 12,
                "documentId": "k3v9w0a1",
                "title": "Second post",
                "content": "More words",
                "createdAt": "2025-02-01T09:00:00.000Z",
                "updatedAt": "2025-02-03T09:00:00.000Z",
                "publishedAt": "2025-02-02T09:00:00.000Z"
            },
            {
                "id": 4,
                "documentId": "a9s8d7f6",
                "title": "First post",
                "content": "Hello",
                "createdAt": "2025-01-01T09:00:00.000Z",
                "updatedAt": "2025-01-01T09:00:00.000Z",
                "publishedAt": "2025-01-01T09:00:00.000Z"
            }
        ],
        "meta": { "pagination": { "page": 2, "pageSize": 2, "pageCount": 5, "total": 9 } }
    })
    .to_string()
}
