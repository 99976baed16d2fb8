//! JSON body extractor that runs `validator` rules.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use sharehub_core::error::AppError;

use crate::error::ApiError;

/// Deserializes a JSON body and validates it.
///
/// Body parse failures and rule violations both surface as
/// `VALIDATION_ERROR` responses.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_field("body", "json", rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}
