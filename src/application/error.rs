// src/application/error.rs
use crate::domain::errors::UpstreamError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

pub const CMS_ERROR_CODE: &str = "CMS_ERROR";

const HINT_UNAUTHORIZED: &str = "CMS returned 401. Provide CMS_TOKEN or open the endpoint.";
const HINT_FORBIDDEN: &str = "CMS returned 403. Check Public role permissions or set CMS_TOKEN.";
const HINT_UNAVAILABLE: &str = "CMS unavailable or misconfigured.";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Uniform failure surfaced to callers whenever the CMS could not serve a
/// request. The upstream status is carried for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({hint})")]
pub struct GatewayError {
    pub code: &'static str,
    pub status: Option<u16>,
    pub message: String,
    pub hint: String,
}

impl GatewayError {
    pub fn from_status(status: Option<u16>) -> Self {
        let hint = match status {
            Some(401) => HINT_UNAUTHORIZED,
            Some(403) => HINT_FORBIDDEN,
            _ => HINT_UNAVAILABLE,
        };
        let message = match status {
            Some(code) => format!("CMS error {code}"),
            None => "CMS unavailable".to_string(),
        };

        Self {
            code: CMS_ERROR_CODE,
            status,
            message,
            hint: hint.to_string(),
        }
    }
}

impl From<&UpstreamError> for GatewayError {
    fn from(err: &UpstreamError) -> Self {
        Self::from_status(err.status)
    }
}
