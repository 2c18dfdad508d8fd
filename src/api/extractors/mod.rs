//! Custom request extractors.

mod client_ip;
mod user_id;
mod validated_json;
mod validated_query;

pub use client_ip::ClientIp;
pub use user_id::UserId;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;

use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Run the field rules, turning violations into one `Validation` error.
fn validated<T: Validate>(value: T) -> Result<T, AppError> {
    match value.validate() {
        Ok(()) => Ok(value),
        Err(e) => Err(AppError::validation(format_validation_errors(&e))),
    }
}

/// Join every rule violation into one message, ordered by field name.
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "b is required"))]
        b: String,
        #[validate(range(min = 1))]
        a: u64,
    }

    #[test]
    fn test_errors_are_joined_in_field_order() {
        let sample = Sample {
            b: String::new(),
            a: 0,
        };
        let message = format_validation_errors(&sample.validate().unwrap_err());
        assert_eq!(message, "a is invalid, b is required");
    }
}
