//! JSON body extractor that runs `validator` rules before the handler.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::validated;
use crate::errors::AppError;

/// Body that deserialized and passed every field rule.
///
/// Syntax errors, missing fields and bad dates surface as `BAD_REQUEST`;
/// rule violations as `VALIDATION_ERROR`. Both are 400s.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => validated(body).map(Self),
            Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
        }
    }
}
