use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),

    // Reference data (catalog, addresses, availability) could not be
    // fetched; the client may retry without losing the draft.
    #[error("collaborator error: {0}")]
    Collaborator(String),

    #[error("{0}")]
    Submission(String),

    #[error("{0}")]
    Payment(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, retryable) = match &self {
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, false),
            AppError::Collaborator(_) => (StatusCode::BAD_GATEWAY, true),
            AppError::Submission(_) => (StatusCode::UNPROCESSABLE_ENTITY, false),
            AppError::Payment(_) => (StatusCode::PAYMENT_REQUIRED, true),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, false),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, false),
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "retryable": retryable,
        });
        (status, axum::Json(body)).into_response()
    }
}
