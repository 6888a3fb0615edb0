use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::http::Error;

pub fn router() -> Router {
    Router::new().route("/", get(root).fallback(method_not_allowed))
}

/// Always answers `OK`.
///
/// The content type claims JSON even though the body is the bare, unquoted string.
async fn root() -> impl IntoResponse {
    (StatusCode::OK, [(CONTENT_TYPE, "application/json")], "OK")
}

async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
