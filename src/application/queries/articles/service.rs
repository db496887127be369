use std::sync::Arc;

use crate::domain::article::ArticleSource;

pub struct ArticleQueryService {
    pub(super) source: Arc<dyn ArticleSource>,
}

impl ArticleQueryService {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }
}
