use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback for unmatched routes: 404 `{"error": "Not found"}`.
pub async fn not_found() -> Response {
    AppError::NotFound("Not found".to_string()).into_response()
}
