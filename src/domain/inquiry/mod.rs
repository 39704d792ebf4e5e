//! Inquiry domain - contact form submissions

mod entity;
mod validation;

pub use entity::{Inquiry, InquiryId, InquiryStatus};
pub use validation::{
    validate_email, validate_inquiry_id, validate_submission, InquiryValidationError,
    MAX_EMAIL_LENGTH,
};
