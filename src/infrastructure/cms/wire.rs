// Shapes of the CMS `/api/articles` response body.
use crate::domain::article::{Article, ArticlePage, PaginationMeta};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub(super) struct CmsArticleList {
    // Each entry only has to be an object; its fields are not interpreted.
    data: Vec<Map<String, Value>>,
    meta: CmsMeta,
}

#[derive(Debug, Deserialize)]
struct CmsMeta {
    pagination: CmsPagination,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CmsPagination {
    page: i64,
    page_size: i64,
    page_count: i64,
    total: i64,
}

// Pagination is taken verbatim; the CMS is the authority on its own counts.
impl From<CmsArticleList> for ArticlePage {
    fn from(raw: CmsArticleList) -> Self {
        let pagination = raw.meta.pagination;
        Self {
            articles: raw.data.into_iter().map(Article::from_fields).collect(),
            pagination: PaginationMeta {
                page: pagination.page,
                page_size: pagination.page_size,
                page_count: pagination.page_count,
                total: pagination.total,
            },
        }
    }
}
