// src/infrastructure/cms/mock.rs
use crate::application::ports::time::Clock;
use crate::domain::{
    article::{Article, ArticlePage, ArticleSource, PageRequest, PaginationMeta},
    errors::SourceResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::{Map, json};
use std::sync::Arc;

pub const MOCK_TOTAL_ARTICLES: i64 = 100;

const MOCK_TITLES: [&str; 15] = [
    "Introducción a React Hooks",
    "TypeScript Best Practices",
    "Node.js Performance Tips",
    "Docker para Desarrolladores",
    "GraphQL vs REST API",
    "Testing con Jest y Cypress",
    "CI/CD con GitHub Actions",
    "Arquitectura de Microservicios",
    "Kubernetes para Principiantes",
    "Seguridad en APIs REST",
    "WebSockets en Tiempo Real",
    "MongoDB vs PostgreSQL",
    "Redis para Caching",
    "AWS Lambda Functions",
    "Patrones de Diseño en JS",
];

/// Offline article source for local development.
///
/// Synthesizes a fixed catalog of [`MOCK_TOTAL_ARTICLES`] items. Article `id`
/// counts down from the newest, and each step back in id is one day earlier
/// relative to the injected clock, so output depends only on the request and
/// the clock.
pub struct MockArticleSource {
    clock: Arc<dyn Clock>,
}

impl MockArticleSource {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn page(&self, request: PageRequest) -> ArticlePage {
        let now = self.clock.now();

        let articles = match request.offset() {
            Some(start) if start < MOCK_TOTAL_ARTICLES => {
                let end = start
                    .saturating_add(request.page_size)
                    .min(MOCK_TOTAL_ARTICLES);
                (start..end)
                    .map(|offset| mock_article(MOCK_TOTAL_ARTICLES - offset, now))
                    .collect()
            }
            _ => Vec::new(),
        };

        tracing::info!(
            count = articles.len(),
            page = request.page,
            page_size = request.page_size,
            "mock CMS: returning synthesized articles"
        );

        ArticlePage {
            articles,
            pagination: PaginationMeta::for_total(
                request.page,
                request.page_size,
                MOCK_TOTAL_ARTICLES,
            ),
        }
    }
}

#[async_trait]
impl ArticleSource for MockArticleSource {
    async fn list_page(&self, request: PageRequest) -> SourceResult<ArticlePage> {
        Ok(self.page(request))
    }
}

fn mock_article(id: i64, now: DateTime<Utc>) -> Article {
    let slot = (id - 1).rem_euclid(MOCK_TITLES.len() as i64);
    let topic = MOCK_TITLES[usize::try_from(slot).unwrap_or_default()];
    let part = (id - 1) / MOCK_TITLES.len() as i64 + 1;
    // Same millisecond `Z` form the CMS emits.
    let stamp = (now - Duration::days(MOCK_TOTAL_ARTICLES - id))
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    let content = format!(
        "# {topic}\n\nEste es el contenido del artículo {id}.\n\n## Introducción\n\nLorem ipsum dolor sit amet..."
    );

    let mut fields = Map::new();
    fields.insert("id".into(), json!(id));
    fields.insert("documentId".into(), json!(format!("mock-doc-{id}")));
    fields.insert("title".into(), json!(format!("{topic} - Part {part}")));
    fields.insert("content".into(), json!(content));
    for key in ["createdAt", "updatedAt", "publishedAt"] {
        fields.insert(key.into(), json!(stamp));
    }
    Article::from_fields(fields)
}
