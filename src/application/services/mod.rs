// src/application/services/mod.rs
use std::sync::Arc;

use crate::{application::queries::articles::ArticleQueryService, domain::article::ArticleSource};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(article_source: Arc<dyn ArticleSource>) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(article_source));

        Self { article_queries }
    }
}
