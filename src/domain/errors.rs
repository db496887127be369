// src/domain/errors.rs
use serde_json::Value;
use thiserror::Error;

pub type SourceResult<T> = Result<T, UpstreamError>;

/// Failure reported by an article source when the CMS could not serve a page.
///
/// `status` is only set when the CMS answered with a non-success HTTP status.
/// Transport failures, timeouts and undecodable bodies leave it empty.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct UpstreamError {
    pub url: String,
    pub status: Option<u16>,
    pub message: String,
    pub body: Option<Value>,
}

impl UpstreamError {
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: None,
            message: message.into(),
            body: None,
        }
    }

    pub fn rejected(
        url: impl Into<String>,
        status: u16,
        message: impl Into<String>,
        body: Option<Value>,
    ) -> Self {
        Self {
            url: url.into(),
            status: Some(status),
            message: message.into(),
            body,
        }
    }
}
