use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleListDto,
        error::{ApplicationResult, GatewayError},
    },
    domain::{
        article::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest},
        errors::UpstreamError,
    },
};

pub struct ListArticlesQuery {
    pub page: i64,
    pub page_size: i64,
}

impl Default for ListArticlesQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ArticleQueryService {
    /// Fetch one page of articles, newest first.
    ///
    /// Every source failure is logged with its diagnostic context and turned
    /// into a single [`GatewayError`]. Nothing is retried.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleListDto> {
        let request = PageRequest::new(query.page, query.page_size);

        match self.source.list_page(request).await {
            Ok(page) => Ok(page.into()),
            Err(err) => {
                report_upstream_failure(&err);
                Err(GatewayError::from(&err).into())
            }
        }
    }
}

fn report_upstream_failure(err: &UpstreamError) {
    tracing::error!(
        cms_url = %err.url,
        status = ?err.status,
        message = %err.message,
        data = ?err.body,
        "CMS fetch failed"
    );
}
