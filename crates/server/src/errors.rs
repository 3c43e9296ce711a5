use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// HTTP-facing error: a status code plus a human-readable detail,
/// rendered as `{"error": "<detail>"}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        ApiError {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found(entity: &str) -> Self {
        ApiError::new(StatusCode::NOT_FOUND, format!("{entity} not found"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = %self.detail, "request failed");
        }
        (self.status, Json(serde_json::json!({"error": self.detail}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg)
            | ServiceError::Model(ModelError::Validation(msg)) => {
                ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            ServiceError::NotFound(entity) => ApiError::not_found(&entity),
            ServiceError::Conflict(msg) => ApiError::new(StatusCode::CONFLICT, msg),
            other => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}
