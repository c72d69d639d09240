//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ValidationFieldError;

/// Standard error response format.
///
/// Request correlation lives in the `x-request-id` response header, not in
/// the body; the middleware echoes it on every response including errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Adds structured details to the error response.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Not-found response with entity/field/value details.
    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "NOT_FOUND",
            &format!("{} with {}={} was not found", entity, field, value),
        )
        .with_details(serde_json::json!({
            "entity": entity,
            "field": field,
            "value": value,
        }))
    }

    /// Conflict response for unique constraint violations.
    pub fn duplicate_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "DUPLICATE_ENTRY",
            &format!("{}.{} = '{}' already exists", entity, field, value),
        )
        .with_details(serde_json::json!({
            "entity": entity,
            "field": field,
            "value": value,
        }))
    }

    /// Validation failure for a single field.
    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new(
            "VALIDATION_ERROR",
            &format!("Validation failed for {}: {}", field, reason),
        )
        .with_details(serde_json::json!({
            "field": field,
            "reason": reason,
        }))
    }

    /// Validation failure covering multiple fields.
    pub fn validation_errors(errors: &[ValidationFieldError]) -> Self {
        Self::new("VALIDATION_ERROR", "Request validation failed").with_details(
            serde_json::json!({
                "errors": errors,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_empty_details() {
        let body = serde_json::to_value(ErrorResponse::new("BAD_REQUEST", "nope")).unwrap();
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn duplicate_error_carries_details() {
        let body = serde_json::to_value(ErrorResponse::duplicate_error(
            "employee",
            "email",
            "vedha@gmail.com",
        ))
        .unwrap();
        assert_eq!(body["code"], "DUPLICATE_ENTRY");
        assert_eq!(body["details"]["value"], "vedha@gmail.com");
    }
}
