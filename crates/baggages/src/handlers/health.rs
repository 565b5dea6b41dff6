//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness check.
///
/// Returns 200 immediately. Does not touch storage.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
