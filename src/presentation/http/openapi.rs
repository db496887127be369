// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::GatewayErrorBody,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::ArticleListDto,
            crate::application::dto::ArticleListMetaDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::PaginationMetaDto
        )
    ),
    tags(
        (name = "Articles", description = "Blog articles read from the CMS"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Blog Gateway API",
        description = "Read-only gateway in front of the headless CMS",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/api/docs`, Redoc at `/api/redoc` and the raw document at
/// [`OPENAPI_JSON_PATH`].
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/api/docs").url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url("/api/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/api/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}

pub fn snapshot_path_from_env() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_article_and_health_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/articles"));
        assert!(doc.paths.paths.contains_key("/api/health"));
    }

    #[test]
    fn article_list_parameters_are_documented() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let params = json["paths"]["/api/articles"]["get"]["parameters"]
            .as_array()
            .cloned()
            .unwrap_or_default();
        let names: Vec<&str> = params.iter().filter_map(|p| p["name"].as_str()).collect();
        assert_eq!(names, vec!["page", "pageSize"]);
    }

    #[test]
    fn gateway_error_schema_is_registered() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(json["components"]["schemas"]["GatewayErrorBody"].is_object());
    }

    #[test]
    fn snapshot_is_written_to_requested_path() {
        let dir = env::temp_dir().join(format!("blog-gateway-openapi-{}", std::process::id()));
        let path = dir.join("nested").join("openapi.json");
        write_openapi_snapshot(&path).unwrap();
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert!(written["paths"]["/api/articles"].is_object());
        std::fs::remove_dir_all(dir).ok();
    }
}
