// src/presentation/http/routes.rs
use crate::config::CorsOrigin;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    error::HttpError,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{Method, Uri, header},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the public router. API endpoints live under `/api`; `/` redirects to
/// the docs.
pub fn build_router(state: HttpState, cors_origin: &CorsOrigin) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/api/health", get(health))
        .route("/api/articles", get(articles::list_articles))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
        .layer(Extension(state))
}

/// A wildcard origin cannot be combined with credentials, so credentials are
/// only allowed for an explicit origin.
pub fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    match origin {
        CorsOrigin::Any => cors.allow_origin(Any).allow_headers(Any),
        CorsOrigin::Exact(value) => cors
            .allow_origin(value.clone())
            .allow_credentials(true)
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
    }
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn not_found(uri: Uri) -> HttpError {
    HttpError::not_found(format!("no route for {}", uri.path()))
}
