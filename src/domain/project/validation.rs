//! Project validation and form value parsing

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use super::entity::Category;
use crate::domain::{DomainError, FieldError};

/// Form fields every new project must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 5] = [
    "title",
    "description",
    "technologies",
    "category",
    "completionDate",
];

/// Project validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectValidationError {
    /// One or more required form fields are absent or blank
    MissingFields { fields: Vec<&'static str> },
    /// A field that was supplied is blank after trimming
    EmptyField { field: &'static str },
    /// Completion date is neither RFC 3339 nor YYYY-MM-DD
    InvalidCompletionDate { value: String },
    /// Technologies list has no usable entries
    NoTechnologies,
    /// Category outside the fixed set
    InvalidCategory { value: String },
    /// No image part on create
    ImageRequired,
    /// Identifier is not a UUID
    InvalidId { id: String },
}

impl ProjectValidationError {
    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingFields { fields } => fields.first().copied().unwrap_or("form"),
            Self::EmptyField { field } => field,
            Self::InvalidCompletionDate { .. } => "completionDate",
            Self::NoTechnologies => "technologies",
            Self::InvalidCategory { .. } => "category",
            Self::ImageRequired => "image",
            Self::InvalidId { .. } => "id",
        }
    }
}

impl fmt::Display for ProjectValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            Self::EmptyField { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidCompletionDate { .. } => write!(f, "Invalid completion date format"),
            Self::NoTechnologies => write!(f, "At least one technology is required"),
            Self::InvalidCategory { value } => write!(
                f,
                "Invalid category '{}': must be one of {}",
                value,
                Category::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::ImageRequired => write!(f, "Project image is required"),
            Self::InvalidId { id } => write!(f, "Invalid project ID '{}'", id),
        }
    }
}

impl std::error::Error for ProjectValidationError {}

impl From<ProjectValidationError> for DomainError {
    fn from(err: ProjectValidationError) -> Self {
        match &err {
            ProjectValidationError::InvalidId { .. } => DomainError::invalid_id(err.to_string()),
            ProjectValidationError::MissingFields { fields } => {
                let errors = fields
                    .iter()
                    .map(|field| FieldError::new(*field, format!("{} is required", field)))
                    .collect();
                DomainError::invalid_fields(err.to_string(), errors)
            }
            _ => {
                let errors = vec![FieldError::new(err.field(), err.to_string())];
                DomainError::invalid_fields(err.to_string(), errors)
            }
        }
    }
}

/// Validate a project identifier
pub fn validate_project_id(id: &str) -> Result<(), ProjectValidationError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| ProjectValidationError::InvalidId { id: id.to_string() })
}

/// Lists the required fields for which `is_present` returns false
pub fn missing_required_fields(is_present: impl Fn(&str) -> bool) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !is_present(field))
        .collect()
}

/// Trimmed non-empty text
pub fn parse_text(field: &'static str, raw: &str) -> Result<String, ProjectValidationError> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ProjectValidationError::EmptyField { field });
    }

    Ok(value.to_string())
}

/// Comma separated tags, trimmed, empties dropped
pub fn parse_technologies(raw: &str) -> Result<Vec<String>, ProjectValidationError> {
    let technologies: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if technologies.is_empty() {
        return Err(ProjectValidationError::NoTechnologies);
    }

    Ok(technologies)
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` (taken as UTC) and `YYYY-MM-DD`
pub fn parse_completion_date(raw: &str) -> Result<DateTime<Utc>, ProjectValidationError> {
    let value = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(date.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or_else(|| ProjectValidationError::InvalidCompletionDate {
            value: value.to_string(),
        })
}

pub fn parse_category(raw: &str) -> Result<Category, ProjectValidationError> {
    raw.trim().parse()
}

/// Only the literal string `true` enables the flag
pub fn parse_featured(raw: &str) -> bool {
    raw.trim() == "true"
}

/// Blank means absent
pub fn parse_optional_url(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_technologies_trims_and_drops_empty() {
        assert_eq!(
            parse_technologies("React, Node").unwrap(),
            vec!["React".to_string(), "Node".to_string()]
        );
        assert_eq!(
            parse_technologies(" Rust ,, ,Axum,").unwrap(),
            vec!["Rust".to_string(), "Axum".to_string()]
        );
    }

    #[test]
    fn test_parse_technologies_rejects_empty_list() {
        assert_eq!(
            parse_technologies(" , ,"),
            Err(ProjectValidationError::NoTechnologies)
        );
        assert_eq!(parse_technologies(""), Err(ProjectValidationError::NoTechnologies));
    }

    #[test]
    fn test_parse_completion_date_formats() {
        let plain = parse_completion_date("2024-03-15").unwrap();
        assert_eq!((plain.year(), plain.month(), plain.day()), (2024, 3, 15));

        let rfc = parse_completion_date("2024-03-15T10:30:00+02:00").unwrap();
        assert_eq!(rfc.to_rfc3339(), "2024-03-15T08:30:00+00:00");

        let local = parse_completion_date("2024-03-15T10:30").unwrap();
        assert_eq!(local.to_rfc3339(), "2024-03-15T10:30:00+00:00");
    }

    #[test]
    fn test_parse_completion_date_invalid() {
        let err = parse_completion_date("next tuesday").unwrap_err();
        assert_eq!(err.to_string(), "Invalid completion date format");
        assert!(parse_completion_date("2024-13-45").is_err());
    }

    #[test]
    fn test_parse_featured() {
        assert!(parse_featured("true"));
        assert!(!parse_featured("false"));
        assert!(!parse_featured("TRUE"));
        assert!(!parse_featured("1"));
        assert!(!parse_featured(""));
    }

    #[test]
    fn test_missing_required_fields_in_order() {
        let present = ["title", "technologies", "category"];
        let missing = missing_required_fields(|f| present.contains(&f));

        assert_eq!(missing, vec!["description", "completionDate"]);

        let err = ProjectValidationError::MissingFields { fields: missing };
        assert_eq!(
            err.to_string(),
            "Missing required fields: description, completionDate"
        );
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_text("title", "  Site  ").unwrap(), "Site");
        assert_eq!(
            parse_text("title", "   "),
            Err(ProjectValidationError::EmptyField { field: "title" })
        );
    }

    #[test]
    fn test_parse_optional_url() {
        assert_eq!(parse_optional_url(""), None);
        assert_eq!(
            parse_optional_url(" https://example.com "),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_invalid_category_lists_choices() {
        let err = parse_category("Games").unwrap_err();
        let message = err.to_string();

        assert_eq!(err.field(), "category");
        assert!(message.contains("Web Development"));
        assert!(message.contains("UI/UX Design"));
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: DomainError = ProjectValidationError::MissingFields {
            fields: vec!["title", "category"],
        }
        .into();

        match err {
            DomainError::InvalidFields { message, errors } => {
                assert_eq!(message, "Missing required fields: title, category");
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[1].field, "category");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err: DomainError = ProjectValidationError::InvalidId { id: "x".to_string() }.into();
        assert!(matches!(err, DomainError::InvalidId { .. }));
    }

    #[test]
    fn test_validate_project_id() {
        assert!(validate_project_id("0b6f8a8e-8f1a-4c58-9a49-2b1c3d4e5f60").is_ok());
        assert!(validate_project_id("507f1f77bcf86cd799439011").is_err());
    }
}
