use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET / - static welcome message.
pub async fn home() -> Response {
    "Welcome to Boruto Api".into_response()
}

/// Fallback for any unmatched route. Plain text, not the JSON envelope
/// the heroes routes use.
pub async fn page_not_found() -> Response {
    (StatusCode::NOT_FOUND, "Page not found").into_response()
}
