//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs `Validate` after deserializing.
///
/// - missing or non-JSON `Content-Type`: 415
/// - malformed JSON or wrong field types: 400 `INVALID_JSON`
/// - failed field rules: 400 `VALIDATION_ERROR` with per-field details
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<ProductInput>) -> impl IntoResponse {
///     // input has passed validation
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
