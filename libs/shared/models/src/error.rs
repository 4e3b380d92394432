use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classify a store client failure. Rows the store returned in an
    /// unexpected shape are internal errors; everything else is the store's.
    pub fn from_store(err: anyhow::Error) -> Self {
        if err.downcast_ref::<serde_json::Error>().is_some() {
            AppError::Internal(format!("{:#}", err))
        } else {
            AppError::Database(err.to_string())
        }
    }

    /// Message placed in the response body, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Database(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Error: {}: {}", status, self.message());
        } else {
            tracing::debug!("Rejected request: {}: {}", status, self.message());
        }

        let body = Json(json!({
            "error": self.message()
        }));

        (status, body).into_response()
    }
}
