//! Infrastructure services

mod auth_service;
mod inquiry_service;
mod project_service;

pub use auth_service::{
    AdminSession, AuthError, AuthService, AuthServiceTrait, LoginRequest,
    INVALID_CREDENTIALS_MESSAGE,
};
pub use inquiry_service::{
    CreateInquiryRequest, InquiryService, InquiryServiceTrait, UpdateInquiryRequest,
    INVALID_INQUIRY_MESSAGE,
};
pub use project_service::{ProjectFields, ProjectService, ProjectServiceTrait};
