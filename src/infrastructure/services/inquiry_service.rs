//! Inquiry service - contact form intake and admin triage

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::inquiry::validate_submission;
use crate::domain::storage::Storage;
use crate::domain::{DomainError, FieldError, Inquiry, InquiryId, InquiryStatus};

/// Message returned for any rejected submission
pub const INVALID_INQUIRY_MESSAGE: &str = "Invalid inquiry data";

/// Request to submit a new inquiry. Fields arrive untrimmed from the form.
#[derive(Debug, Clone, Default)]
pub struct CreateInquiryRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

/// Request to change an inquiry's status
#[derive(Debug, Clone, Default)]
pub struct UpdateInquiryRequest {
    pub status: Option<String>,
}

/// Trait for inquiry operations
#[async_trait]
pub trait InquiryServiceTrait: Send + Sync + Debug {
    async fn create(&self, request: CreateInquiryRequest) -> Result<Inquiry, DomainError>;

    /// All inquiries, newest first
    async fn list(&self) -> Result<Vec<Inquiry>, DomainError>;

    async fn update_status(
        &self,
        id: &str,
        request: UpdateInquiryRequest,
    ) -> Result<Inquiry, DomainError>;

    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Checks that the backing store answers
    async fn ping(&self) -> Result<(), DomainError>;
}

/// Inquiry service backed by a storage collection
#[derive(Debug)]
pub struct InquiryService<S: Storage<Inquiry> + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage<Inquiry> + ?Sized> InquiryService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    fn parse_id(id: &str) -> Result<InquiryId, DomainError> {
        InquiryId::new(id).map_err(DomainError::from)
    }

    fn not_found() -> DomainError {
        DomainError::not_found("Inquiry not found")
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl<S: Storage<Inquiry> + ?Sized> InquiryServiceTrait for InquiryService<S> {
    async fn create(&self, request: CreateInquiryRequest) -> Result<Inquiry, DomainError> {
        let name = trimmed(request.name);
        let email = trimmed(request.email);
        let message = trimmed(request.message);

        validate_submission(&name, &email, &message).map_err(|errors| {
            DomainError::invalid_fields(
                INVALID_INQUIRY_MESSAGE,
                errors.into_iter().map(FieldError::from).collect(),
            )
        })?;

        let mut inquiry = Inquiry::new(InquiryId::generate(), name, email, message);

        if let Some(phone) = non_blank(request.phone) {
            inquiry = inquiry.with_phone(phone);
        }

        if let Some(company) = non_blank(request.company) {
            inquiry = inquiry.with_company(company);
        }

        let inquiry = self.storage.create(inquiry).await?;
        info!(inquiry_id = %inquiry.id(), "Inquiry received");

        Ok(inquiry)
    }

    async fn list(&self) -> Result<Vec<Inquiry>, DomainError> {
        let mut inquiries = self.storage.list().await?;
        inquiries.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(inquiries)
    }

    async fn update_status(
        &self,
        id: &str,
        request: UpdateInquiryRequest,
    ) -> Result<Inquiry, DomainError> {
        let inquiry_id = Self::parse_id(id)?;

        let raw = request.status.unwrap_or_default();
        let status: InquiryStatus = raw.parse()?;

        let mut inquiry = self
            .storage
            .get(&inquiry_id)
            .await?
            .ok_or_else(Self::not_found)?;

        inquiry.set_status(status);
        let inquiry = self.storage.update(inquiry).await?;

        info!(inquiry_id = %inquiry_id, status = %status, "Inquiry status updated");
        Ok(inquiry)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let inquiry_id = Self::parse_id(id)?;

        if !self.storage.delete(&inquiry_id).await? {
            return Err(Self::not_found());
        }

        info!(inquiry_id = %inquiry_id, "Inquiry deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.storage.ping().await
    }
}
