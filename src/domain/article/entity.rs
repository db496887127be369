// src/domain/article/entity.rs
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// A published CMS content item, held as the JSON object the CMS produced.
///
/// Fields are kept verbatim: unknown keys, `null` values and timestamp strings
/// all reach the caller exactly as they arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    fields: Map<String, Value>,
}

impl Article {
    pub const fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn id(&self) -> Option<i64> {
        self.fields.get("id").and_then(Value::as_i64)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// `publishedAt` parsed as RFC 3339, if present and well formed.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.text("publishedAt")?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|value| value.with_timezone(&Utc))
    }

    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: i64,
    pub page_size: i64,
    pub page_count: i64,
    pub total: i64,
}

impl PaginationMeta {
    /// Build page metadata for a locally known total. A non-positive page size
    /// yields zero pages instead of dividing by zero.
    pub fn for_total(page: i64, page_size: i64, total: i64) -> Self {
        let page_count = if page_size > 0 {
            total / page_size + i64::from(total % page_size != 0)
        } else {
            0
        };

        Self {
            page,
            page_size,
            page_count,
            total,
        }
    }
}

/// One page of articles, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub pagination: PaginationMeta,
}
