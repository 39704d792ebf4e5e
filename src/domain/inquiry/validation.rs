//! Inquiry validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::domain::{DomainError, FieldError};

/// Maximum length of an email address
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Loose address shape: something@something.tld, no whitespace
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Inquiry validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum InquiryValidationError {
    /// A required field is missing or blank
    MissingField { field: &'static str },
    /// Email does not look like an address
    InvalidEmail { email: String },
    /// Status outside new/read/responded
    InvalidStatus { value: String },
    /// Identifier is not a UUID
    InvalidId { id: String },
}

impl InquiryValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } => field,
            Self::InvalidEmail { .. } => "email",
            Self::InvalidStatus { .. } => "status",
            Self::InvalidId { .. } => "id",
        }
    }
}

impl fmt::Display for InquiryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{} is required", capitalize(field)),
            Self::InvalidEmail { email } => write!(f, "Invalid email address '{}'", email),
            Self::InvalidStatus { value } => write!(
                f,
                "Invalid status '{}': must be one of new, read, responded",
                value
            ),
            Self::InvalidId { id } => write!(f, "Invalid inquiry ID '{}'", id),
        }
    }
}

impl std::error::Error for InquiryValidationError {}

impl From<InquiryValidationError> for FieldError {
    fn from(err: InquiryValidationError) -> Self {
        FieldError::new(err.field(), err.to_string())
    }
}

impl From<InquiryValidationError> for DomainError {
    fn from(err: InquiryValidationError) -> Self {
        match err {
            InquiryValidationError::InvalidId { .. } => DomainError::invalid_id(err.to_string()),
            other => {
                let message = other.to_string();
                DomainError::invalid_fields(message, vec![other.into()])
            }
        }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Validate an inquiry identifier
pub fn validate_inquiry_id(id: &str) -> Result<(), InquiryValidationError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| InquiryValidationError::InvalidId { id: id.to_string() })
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), InquiryValidationError> {
    if email.len() > MAX_EMAIL_LENGTH || !EMAIL_PATTERN.is_match(email) {
        return Err(InquiryValidationError::InvalidEmail {
            email: email.to_string(),
        });
    }

    Ok(())
}

/// Validate the fields of a public submission, collecting every problem.
/// Inputs are expected to be trimmed already.
pub fn validate_submission(
    name: &str,
    email: &str,
    message: &str,
) -> Result<(), Vec<InquiryValidationError>> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(InquiryValidationError::MissingField { field: "name" });
    }

    if email.is_empty() {
        errors.push(InquiryValidationError::MissingField { field: "email" });
    } else if let Err(e) = validate_email(email) {
        errors.push(e);
    }

    if message.is_empty() {
        errors.push(InquiryValidationError::MissingField { field: "message" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("j.doe+site@mail.studio.io").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("jane").is_err());
        assert!(validate_email("jane@example").is_err());
        assert!(validate_email("jane doe@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert!(validate_email(&email).is_err());
    }

    #[test]
    fn test_validate_submission_ok() {
        assert!(validate_submission("Jane", "jane@example.com", "Hello").is_ok());
    }

    #[test]
    fn test_validate_submission_collects_all_errors() {
        let errors = validate_submission("", "not-an-email", "").unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn test_missing_field_message() {
        let err = InquiryValidationError::MissingField { field: "name" };
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_field_error_conversion() {
        let field_error: FieldError = InquiryValidationError::InvalidStatus {
            value: "archived".to_string(),
        }
        .into();

        assert_eq!(field_error.field, "status");
        assert!(field_error.message.contains("archived"));
    }

    #[test]
    fn test_validate_inquiry_id() {
        assert!(validate_inquiry_id("0b6f8a8e-8f1a-4c58-9a49-2b1c3d4e5f60").is_ok());
        assert!(validate_inquiry_id("not-a-uuid").is_err());
        assert!(validate_inquiry_id("").is_err());
    }
}
