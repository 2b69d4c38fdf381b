use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// JSON body extractor whose rejections render as validation errors.
/// Malformed JSON, a wrong content type, a non-object body and mistyped
/// fields all become 400.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state).await?;

        // Derived struct deserializers also accept positional arrays
        if !value.is_object() {
            return Err(AppError::Validation(
                "Request body must be a JSON object".to_string(),
            ));
        }

        let value = serde_json::from_value(value).map_err(|e| {
            AppError::Validation(format!("Failed to deserialize the JSON body: {}", e))
        })?;
        Ok(Self(value))
    }
}

/// Path extractor whose rejections render as validation errors
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Require a present, non-blank value no longer than `max_len` characters
pub fn validate_required(value: Option<&str>, field: &str, max_len: usize) -> AppResult<()> {
    match value {
        None => Err(AppError::Validation(format!("{} is required", field))),
        Some(v) if v.trim().is_empty() => {
            Err(AppError::Validation(format!("{} must not be empty", field)))
        }
        Some(v) => validate_length(v, field, max_len),
    }
}

/// Length check for optional values; absent values pass
pub fn validate_optional(value: Option<&str>, field: &str, max_len: usize) -> AppResult<()> {
    match value {
        Some(v) => validate_length(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_length(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(())
}
