//! Inquiry entity and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_inquiry_id, InquiryValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Inquiry identifier (UUID string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InquiryId(String);

impl InquiryId {
    /// Create an InquiryId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, InquiryValidationError> {
        let id = id.into();
        validate_inquiry_id(&id)?;
        Ok(Self(id))
    }

    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InquiryId {
    type Error = InquiryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InquiryId> for String {
    fn from(id: InquiryId) -> Self {
        id.0
    }
}

impl std::fmt::Display for InquiryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for InquiryId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Handling state of an inquiry. Any transition is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Read,
    Responded,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Responded => "responded",
        }
    }
}

impl FromStr for InquiryStatus {
    type Err = InquiryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "responded" => Ok(Self::Responded),
            other => Err(InquiryValidationError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(rename = "_id")]
    id: InquiryId,
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    message: String,
    status: InquiryStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Inquiry {
    /// Create a new inquiry with status `new`
    pub fn new(
        id: InquiryId,
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
            message: message.into(),
            status: InquiryStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn id(&self) -> &InquiryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> InquiryStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_status(&mut self, status: InquiryStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Inquiry {
    type Key = InquiryId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inquiry {
        Inquiry::new(InquiryId::generate(), "Jane", "jane@example.com", "Hello")
    }

    #[test]
    fn test_new_inquiry_is_new() {
        let inquiry = sample();

        assert_eq!(inquiry.status(), InquiryStatus::New);
        assert_eq!(inquiry.created_at(), inquiry.updated_at());
        assert!(inquiry.phone().is_none());
    }

    #[test]
    fn test_set_status_touches_updated_at() {
        let mut inquiry = sample();
        let before = inquiry.updated_at();

        inquiry.set_status(InquiryStatus::Responded);

        assert_eq!(inquiry.status(), InquiryStatus::Responded);
        assert!(inquiry.updated_at() >= before);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("new".parse::<InquiryStatus>(), Ok(InquiryStatus::New));
        assert_eq!("read".parse::<InquiryStatus>(), Ok(InquiryStatus::Read));
        assert_eq!(
            "responded".parse::<InquiryStatus>(),
            Ok(InquiryStatus::Responded)
        );
        assert!("archived".parse::<InquiryStatus>().is_err());
        assert!("NEW".parse::<InquiryStatus>().is_err());
    }

    #[test]
    fn test_inquiry_id_rejects_non_uuid() {
        assert!(InquiryId::new("abc").is_err());
        assert!(InquiryId::new(InquiryId::generate().as_str()).is_ok());
    }

    #[test]
    fn test_serialization_shape() {
        let inquiry = sample().with_company("Acme");
        let json = serde_json::to_value(&inquiry).unwrap();

        assert!(json.get("_id").is_some());
        assert_eq!(json["status"], "new");
        assert_eq!(json["company"], "Acme");
        assert!(json.get("phone").is_none());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_roundtrip_through_storage_format() {
        let inquiry = sample().with_phone("555-0100");
        let json = serde_json::to_value(&inquiry).unwrap();
        let restored: Inquiry = serde_json::from_value(json).unwrap();

        assert_eq!(restored.id(), inquiry.id());
        assert_eq!(restored.phone(), Some("555-0100"));
    }
}
