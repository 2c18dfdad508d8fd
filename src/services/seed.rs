//! Startup seeding of a sample user.

use chrono::NaiveDate;

use super::UserService;
use crate::config::SAMPLE_USER_EMAIL;
use crate::domain::CreateUser;
use crate::errors::{AppError, AppResult};

fn sample_user() -> CreateUser {
    CreateUser {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: SAMPLE_USER_EMAIL.to_string(),
        phone_number: Some("+919876543210".to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15),
        is_active: true,
    }
}

/// Create the sample user unless that email is already taken.
///
/// Returns `true` when a row was inserted. No location is recorded.
pub async fn ensure_sample_user(users: &dyn UserService) -> AppResult<bool> {
    match users.create_user(sample_user()).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "Sample user created");
            Ok(true)
        }
        Err(AppError::Conflict(_)) => {
            tracing::debug!("Sample user already present");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
