//! Domain layer - entities, validation and the storage abstraction

pub mod admin;
pub mod error;
pub mod inquiry;
pub mod project;
pub mod storage;

pub use admin::{AdminIdentity, ADMIN_ROLE};
pub use error::{DomainError, FieldError};
pub use inquiry::{Inquiry, InquiryId, InquiryStatus, InquiryValidationError};
pub use project::{Category, Project, ProjectFilter, ProjectId, ProjectValidationError};
pub use storage::{Storage, StorageEntity, StorageKey};
