// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::ArticleListDto,
    queries::articles::ListArticlesQuery,
};
use crate::domain::article::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::RawQuery};
use serde::Deserialize;
use utoipa::IntoParams;

/// Pagination parameters as received. Values stay raw strings so that bad
/// input falls back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number. Defaults to 1.
    #[param(value_type = Option<i64>, example = 1)]
    pub page: Option<String>,
    /// Items per page. Defaults to 15.
    #[param(value_type = Option<i64>, example = 15)]
    pub page_size: Option<String>,
}

impl ArticleListParams {
    /// Read the parameters from a raw query string. The first occurrence of a
    /// key wins; unknown keys are ignored.
    pub fn from_query(raw: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = raw
            .and_then(|query| serde_urlencoded::from_str(query).ok())
            .unwrap_or_default();

        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        Self {
            page: first("page"),
            page_size: first("pageSize"),
        }
    }

    pub fn into_query(self) -> ListArticlesQuery {
        ListArticlesQuery {
            page: parse_int_or(self.page.as_deref(), DEFAULT_PAGE),
            page_size: parse_int_or(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
        }
    }
}

/// Permissive integer parsing: leading whitespace, an optional sign and the
/// leading run of digits are used; anything after the digits is ignored.
/// Input with no leading digits, or that overflows, yields `default`.
pub fn parse_int_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(leading_integer).unwrap_or(default)
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude = unsigned[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of published articles, newest first.", body = ArticleListDto),
        (status = 502, description = "The CMS is unavailable, misconfigured or refused the request.", body = crate::presentation::http::error::GatewayErrorBody)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    RawQuery(raw): RawQuery,
) -> HttpResult<Json<ArticleListDto>> {
    let query = ArticleListParams::from_query(raw.as_deref()).into_query();

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}
