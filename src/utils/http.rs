use axum::{http::StatusCode, response::IntoResponse};

/// Fallback for routes that only accept `POST`.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
