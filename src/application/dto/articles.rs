use crate::domain::article::{Article, ArticlePage, PaginationMeta};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One article exactly as the CMS returned it. Usual keys are `id`,
/// `documentId`, `title`, `content`, `createdAt`, `updatedAt` and
/// `publishedAt`; any other key is passed along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ArticleDto(Map<String, Value>);

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self(article.into_fields())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetaDto {
    pub page: i64,
    pub page_size: i64,
    pub page_count: i64,
    pub total: i64,
}

impl From<PaginationMeta> for PaginationMetaDto {
    fn from(meta: PaginationMeta) -> Self {
        Self {
            page: meta.page,
            page_size: meta.page_size,
            page_count: meta.page_count,
            total: meta.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleListMetaDto {
    pub pagination: PaginationMetaDto,
}

/// Response body of the article list: the CMS envelope, `data` plus `meta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleListDto {
    pub data: Vec<ArticleDto>,
    pub meta: ArticleListMetaDto,
}

impl From<ArticlePage> for ArticleListDto {
    fn from(page: ArticlePage) -> Self {
        Self {
            data: page.articles.into_iter().map(Into::into).collect(),
            meta: ArticleListMetaDto {
                pagination: page.pagination.into(),
            },
        }
    }
}
