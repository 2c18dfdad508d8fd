//! Field rules shared by the create and update payloads.
//!
//! The functions here plug into `validator` custom rules; the
//! `deserialize_*` helpers normalize raw JSON before rules run.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

use crate::config::{ALLOWED_COUNTRY_CODES, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};

/// Reject empty and whitespace-only strings.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// E.164-style phone check against the supported country calling codes.
///
/// The message names the first rule the number breaks.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    check_phone(phone).map_err(|message| {
        let mut err = ValidationError::new("phone_number");
        err.message = Some(Cow::Borrowed(message));
        err
    })
}

fn check_phone(phone: &str) -> Result<(), &'static str> {
    let digits = phone
        .strip_prefix('+')
        .ok_or("Phone must start with country code like +91XXXXXXXXXX")?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("Phone must contain only digits after +");
    }

    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err("Phone must have 7 to 15 digits (excluding +)");
    }

    country_code(digits)
        .map(|_| ())
        .ok_or("Invalid/unsupported country code")
}

/// Shortest allowed calling code that prefixes `digits`.
///
/// The prefix is compared as text, not as a number, so a leading zero
/// never matches: `+091...` is rejected even though `091` parses to 91.
fn country_code(digits: &str) -> Option<u32> {
    (1..=3).filter(|&n| digits.len() >= n).find_map(|n| {
        let prefix = &digits[..n];
        ALLOWED_COUNTRY_CODES
            .iter()
            .copied()
            .find(|code| code.to_string() == prefix)
    })
}

/// Trim a phone number; blank input means "no phone".
pub fn normalize_phone(raw: Option<String>) -> Option<String> {
    raw.map(|p| p.trim().to_string()).filter(|p| !p.is_empty())
}

/// `phone_number` on create: null, blank and missing all become `None`.
pub fn deserialize_phone<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(normalize_phone)
}

/// `phone_number` on update: a present key is `Some`, and a null or
/// blank value inside it clears the stored number.
pub fn deserialize_phone_patch<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|raw| Some(normalize_phone(raw)))
}

/// Distinguish an explicit `null` from a missing key (paired with `#[serde(default)]`).
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
