// src/infrastructure/cms/client.rs
use super::wire::CmsArticleList;
use crate::domain::{
    article::{ArticlePage, ArticleSource, PageRequest},
    errors::{SourceResult, UpstreamError},
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

const ARTICLES_PATH: &str = "/api/articles";
const SORT_NEWEST_FIRST: &str = "publishedAt:desc";

/// Live article source backed by the CMS REST API.
#[derive(Clone, Debug)]
pub struct CmsArticleSource {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl CmsArticleSource {
    pub fn new(client: Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Build a source with its own HTTP client. Timeouts surface as transport
    /// failures.
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, base_url, token))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the list endpoint using the CMS bracket query convention,
    /// e.g. `pagination[page]=1&pagination[pageSize]=15&sort[0]=publishedAt:desc`.
    pub fn articles_url(&self, request: PageRequest) -> SourceResult<String> {
        let query = serde_urlencoded::to_string([
            ("pagination[page]", request.page.to_string()),
            ("pagination[pageSize]", request.page_size.to_string()),
            ("sort[0]", SORT_NEWEST_FIRST.to_string()),
        ])
        .map_err(|err| UpstreamError::transport(&self.base_url, err.to_string()))?;

        Ok(format!("{}{ARTICLES_PATH}?{query}", self.base_url))
    }
}

#[async_trait]
impl ArticleSource for CmsArticleSource {
    async fn list_page(&self, request: PageRequest) -> SourceResult<ArticlePage> {
        let url = self.articles_url(request)?;

        let mut call = self.client.get(&url);
        if let Some(token) = &self.token {
            call = call.bearer_auth(token);
        }

        let response = call
            .send()
            .await
            .map_err(|err| UpstreamError::transport(&self.base_url, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(UpstreamError::rejected(
                &self.base_url,
                status.as_u16(),
                format!("CMS responded with {status}"),
                body,
            ));
        }

        let list: CmsArticleList = response.json().await.map_err(|err| {
            UpstreamError::transport(&self.base_url, format!("malformed CMS response: {err}"))
        })?;

        Ok(list.into())
    }
}

/// Error bodies are kept for the diagnostic log: JSON when it parses, raw text
/// otherwise.
async fn read_error_body(response: Response) -> Option<Value> {
    let text = response.text().await.ok()?;
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}
