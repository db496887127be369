use crate::application::{
    ApplicationResult,
    error::{ApplicationError, GatewayError},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub enum HttpError {
    /// The CMS failed; always answered with 502 regardless of its own status.
    Gateway(GatewayError),
    Plain { status: StatusCode, message: String },
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Gateway(gateway) => Self::Gateway(gateway),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Plain {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Gateway(_) => StatusCode::BAD_GATEWAY,
            Self::Plain { status, .. } => *status,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Gateway(gateway) => (status, Json(GatewayErrorBody::from(gateway))).into_response(),
            Self::Plain { message, .. } => {
                let payload = ErrorResponse {
                    error: status.canonical_reason().unwrap_or("error").to_string(),
                    message,
                };
                (status, Json(payload)).into_response()
            }
        }
    }
}

/// Body returned with 502 when the CMS could not be reached or refused the call.
#[derive(Debug, Serialize, ToSchema)]
pub struct GatewayErrorBody {
    #[schema(example = "CMS_ERROR")]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
    pub hint: String,
}

impl From<GatewayError> for GatewayErrorBody {
    fn from(err: GatewayError) -> Self {
        Self {
            error: err.code.to_string(),
            status: err.status,
            message: err.message,
            hint: err.hint,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
