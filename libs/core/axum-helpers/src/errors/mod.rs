pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product with id '7' was not found.",
///   "details": null
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Structured details, e.g. per-field validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type rendered as a JSON [`ErrorResponse`].
///
/// Domain crates convert their own errors into this at the HTTP boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Unsupported Media Type: {0}")]
    UnsupportedMediaType(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    fn into_parts(self) -> (StatusCode, ErrorCode, String, Option<serde_json::Value>) {
        match self {
            AppError::JsonExtractorRejection(rejection) => map_json_rejection(rejection),
            AppError::QueryExtractorRejection(rejection) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidQuery.code(),
                    "Query rejection: {}",
                    rejection.body_text()
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidQuery,
                    rejection.body_text(),
                    None,
                )
            }
            AppError::ValidationError(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();

                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    fields = ?fields,
                    "Validation error"
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    format!(
                        "{}: {}",
                        ErrorCode::ValidationError.default_message(),
                        fields.join(", ")
                    ),
                    serde_json::to_value(&errors).ok(),
                )
            }
            AppError::InvalidQuery(msg) => {
                tracing::info!(error_code = ErrorCode::InvalidQuery.code(), "Invalid query: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidQuery, msg, None)
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), id = %raw, "Invalid id");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidId,
                    format!("Invalid id '{}': expected an integer", raw),
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg, None)
            }
            AppError::MethodNotAllowed => {
                tracing::info!(error_code = ErrorCode::MethodNotAllowed.code(), "Method not allowed");
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    ErrorCode::MethodNotAllowed,
                    ErrorCode::MethodNotAllowed.default_message().to_string(),
                    None,
                )
            }
            AppError::UnsupportedMediaType(msg) => {
                tracing::info!(
                    error_code = ErrorCode::UnsupportedMediaType.code(),
                    "Unsupported media type: {}",
                    msg
                );
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    ErrorCode::UnsupportedMediaType,
                    msg,
                    None,
                )
            }
            AppError::Database(msg) => {
                tracing::error!(error_code = ErrorCode::DatabaseError.code(), "Database error: {}", msg);
                // Driver messages stay in the logs
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    ErrorCode::DatabaseError.default_message().to_string(),
                    None,
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    msg
                );
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::ServiceUnavailable,
                    msg,
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.into_parts();

        let body = Json(ErrorResponse {
            details,
            ..ErrorResponse::new(code, message)
        });

        (status, body).into_response()
    }
}

/// Missing content type is a 415; malformed or mistyped bodies are 400.
fn map_json_rejection(
    rejection: JsonRejection,
) -> (StatusCode, ErrorCode, String, Option<serde_json::Value>) {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            tracing::info!(
                error_code = ErrorCode::UnsupportedMediaType.code(),
                "Request without JSON content type"
            );
            (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ErrorCode::UnsupportedMediaType,
                ErrorCode::UnsupportedMediaType.default_message().to_string(),
                None,
            )
        }
        JsonRejection::JsonDataError(e) => {
            tracing::info!(error_code = ErrorCode::InvalidJson.code(), "JSON data error: {}", e.body_text());
            (StatusCode::BAD_REQUEST, ErrorCode::InvalidJson, e.body_text(), None)
        }
        JsonRejection::JsonSyntaxError(e) => {
            tracing::info!(error_code = ErrorCode::InvalidJson.code(), "JSON syntax error: {}", e.body_text());
            (StatusCode::BAD_REQUEST, ErrorCode::InvalidJson, e.body_text(), None)
        }
        other => {
            tracing::warn!(error_code = ErrorCode::BadRequest.code(), "JSON extraction error: {}", other.body_text());
            (other.status(), ErrorCode::BadRequest, other.body_text(), None)
        }
    }
}
