//! `/:id` path segment for user routes.

use std::num::IntErrorKind;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::{AppError, AppResult};

/// User id from the path.
///
/// Non-numeric ids are a 400 with the usual error body. Numeric ids
/// outside the id column's range cannot name a user, so they are a 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i32);

fn parse_user_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => AppError::not_found("User"),
        _ => AppError::bad_request(format!("Invalid user id: {}", raw)),
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        parse_user_id(&raw).map(UserId)
    }
}
