use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

use super::AppError;

/// Router fallback for unknown paths.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    AppError::NotFound(format!("No route for {} {}", method, uri.path())).into_response()
}

/// Fallback for paths that exist but not for the request's method.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed.into_response()
}
