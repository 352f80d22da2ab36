use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// HTTP face of a [`ServiceError`].
///
/// Client errors and the product-create `Unexpected` failure answer with a
/// bare status. Anything else falls through to a generic 500 whose detail
/// only reaches the log.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e) }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidReference(_) | ServiceError::InvalidField(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unexpected(_) | ServiceError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            ServiceError::NotFound(_)
            | ServiceError::InvalidReference(_)
            | ServiceError::InvalidField(_)
            | ServiceError::Unexpected(_) => status.into_response(),
            e => {
                error!(error = %e, "unhandled service error");
                (status, Json(serde_json::json!({"error": "Internal Server Error"}))).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
