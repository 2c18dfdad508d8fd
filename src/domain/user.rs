//! User domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{
    deserialize_nullable, deserialize_phone, deserialize_phone_patch, validate_not_blank,
    validate_phone,
};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// `false` once the user has been soft deleted
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if user is soft deleted
    pub fn is_deleted(&self) -> bool {
        !self.is_active
    }
}

fn default_active() -> bool {
    true
}

/// User creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(custom(function = "validate_not_blank", message = "first_name cannot be empty"))]
    #[schema(example = "John")]
    pub first_name: String,
    #[validate(custom(function = "validate_not_blank", message = "last_name cannot be empty"))]
    #[schema(example = "Doe")]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "john@example.com")]
    pub email: String,
    /// E.164 number with a supported country code; blank means none
    #[serde(default, deserialize_with = "deserialize_phone")]
    #[validate(custom(function = "validate_phone"))]
    #[schema(example = "+919876543210")]
    pub phone_number: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "1990-05-17")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Partial user update payload.
///
/// Missing keys leave the stored value alone. For the nullable columns
/// (`phone_number`, `date_of_birth`) the outer `Option` records whether the
/// key was sent and the inner one carries the new value, so `null` clears.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(custom(function = "validate_not_blank", message = "first_name cannot be empty"))]
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[validate(custom(function = "validate_not_blank", message = "last_name cannot be empty"))]
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_phone_patch")]
    #[validate(custom(function = "validate_phone"))]
    #[schema(value_type = Option<String>, example = "+447911123456")]
    pub phone_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>, format = Date)]
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub is_active: Option<bool>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "+919876543210")]
    pub phone_number: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone_number: user.phone_number,
            date_of_birth: user.date_of_birth,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_payload(value: serde_json::Value) -> CreateUser {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    fn update_payload(value: serde_json::Value) -> UpdateUser {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn test_create_defaults() {
        let payload = create_payload(json!({
            "first_name": "John",
            "last_name": "Doe",
            "email": "john@example.com"
        }));

        assert!(payload.is_active);
        assert!(payload.phone_number.is_none());
        assert!(payload.date_of_birth.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_create_blank_phone_is_absent() {
        let payload = create_payload(json!({
            "first_name": "John",
            "last_name": "Doe",
            "email": "john@example.com",
            "phone_number": "   "
        }));

        assert!(payload.phone_number.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_blank_name_and_bad_email() {
        let payload = create_payload(json!({
            "first_name": "  ",
            "last_name": "Doe",
            "email": "not-an-email"
        }));

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("last_name"));
    }

    #[test]
    fn test_create_rejects_bad_phone() {
        let payload = create_payload(json!({
            "first_name": "John",
            "last_name": "Doe",
            "email": "john@example.com",
            "phone_number": "+99123456789"
        }));

        assert!(payload.validate().unwrap_err().field_errors().contains_key("phone_number"));
    }

    #[test]
    fn test_create_parses_date_of_birth() {
        let payload = create_payload(json!({
            "first_name": "John",
            "last_name": "Doe",
            "email": "john@example.com",
            "date_of_birth": "1990-05-17"
        }));

        assert_eq!(payload.date_of_birth, NaiveDate::from_ymd_opt(1990, 5, 17));
    }

    #[test]
    fn test_create_rejects_malformed_date() {
        let result: Result<CreateUser, _> = serde_json::from_value(json!({
            "first_name": "John",
            "last_name": "Doe",
            "email": "john@example.com",
            "date_of_birth": "17/05/1990"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_update_distinguishes_missing_and_null() {
        let absent = update_payload(json!({ "first_name": "Jane" }));
        assert!(absent.phone_number.is_none());
        assert!(absent.date_of_birth.is_none());

        let cleared = update_payload(json!({ "phone_number": null, "date_of_birth": null }));
        assert_eq!(cleared.phone_number, Some(None));
        assert_eq!(cleared.date_of_birth, Some(None));

        let blank = update_payload(json!({ "phone_number": "" }));
        assert_eq!(blank.phone_number, Some(None));
        assert!(blank.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_blank_name_when_present() {
        let payload = update_payload(json!({ "last_name": " " }));
        assert!(payload.validate().unwrap_err().field_errors().contains_key("last_name"));

        let untouched = update_payload(json!({ "phone_number": "+919876543210" }));
        assert!(untouched.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_bad_phone() {
        let payload = update_payload(json!({ "phone_number": "123456" }));
        assert!(payload.validate().is_err());
    }
}
