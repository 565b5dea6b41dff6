use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use baggages_core::storage::{repository_error_to_status_code, RepositoryError};

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced row does not exist.
    #[error("{0} is not found")]
    NotFound(&'static str),
    /// The request body is not the JSON we expect.
    #[error("Failed to decode JSON: {0}")]
    Decode(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Repository(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::debug!(status = %status, message = %message, "Request rejected");
        }

        (status, Json(ErrorBody { message })).into_response()
    }
}
