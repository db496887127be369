use crate::domain::article::entity::ArticlePage;
use crate::domain::article::value_objects::PageRequest;
use crate::domain::errors::SourceResult;
use async_trait::async_trait;

/// Read side of the CMS. One call fetches exactly one page.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn list_page(&self, request: PageRequest) -> SourceResult<ArticlePage>;
}
