// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use blog_gateway::application::services::ApplicationServices;
use blog_gateway::config::CorsOrigin;
use blog_gateway::domain::article::ArticleSource;
use blog_gateway::infrastructure::cms::{CmsArticleSource, MockArticleSource};
use blog_gateway::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt as _;

pub fn router_with_source(source: Arc<dyn ArticleSource>) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(source));
    build_router(HttpState { services }, &CorsOrigin::Any)
}

/// Router backed by the mock catalog with a frozen clock.
pub fn make_mock_router() -> axum::Router {
    let source = MockArticleSource::new(Arc::new(mocks::FixedClock));
    router_with_source(Arc::new(source))
}

/// Router talking to a live CMS at `base_url`.
pub fn make_live_router(base_url: &str, token: Option<&str>) -> axum::Router {
    make_live_router_with_timeout(base_url, token, Duration::from_secs(5))
}

pub fn make_live_router_with_timeout(
    base_url: &str,
    token: Option<&str>,
    timeout: Duration,
) -> axum::Router {
    let source = CmsArticleSource::with_timeout(base_url, token.map(str::to_string), timeout)
        .expect("build reqwest client");
    router_with_source(Arc::new(source))
}

pub async fn send_get(app: axum::Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

/// Issue a GET and decode the JSON body, asserting the JSON content type.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let resp = send_get(app, uri).await;
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("valid json body");
    (status, json)
}

/// Assert a 502 gateway error whose hint contains `hint_fragment`.
pub async fn assert_gateway_error(
    app: axum::Router,
    uri: &str,
    expected_upstream: Option<u16>,
    hint_fragment: &str,
) -> Value {
    let (status, json) = get_json(app, uri).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY, "body: {json}");
    assert_eq!(json["error"], "CMS_ERROR");
    match expected_upstream {
        Some(code) => assert_eq!(json["status"], code),
        None => assert!(json.get("status").is_none(), "status should be absent: {json}"),
    }
    let hint = json["hint"].as_str().unwrap_or("");
    assert!(
        hint.contains(hint_fragment),
        "hint {hint:?} does not mention {hint_fragment:?}"
    );
    assert!(!json["message"].as_str().unwrap_or("").is_empty());
    json
}

pub fn article_ids(json: &Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|a| a["id"].as_i64().expect("numeric id"))
        .collect()
}
