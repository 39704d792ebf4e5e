//! API request/response types

pub mod error;
pub mod json;
pub mod origin;
pub mod project;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType, ErrorDetails, SERVER_ERROR_MESSAGE};
pub use json::Json;
pub use origin::RequestOrigin;
pub use project::ProjectResponse;

use serde::Serialize;

/// Plain `{message}` acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
