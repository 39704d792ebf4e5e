//! API error types
//!
//! Every failure is rendered as `{message, type, errors?, param?, details?}`.
//! Server errors carry a generic message; their cause is logged and attached
//! to the response as an [`ErrorDetails`] extension, which the development
//! error middleware may expose.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, FieldError};
use crate::infrastructure::services::AuthError;
use crate::infrastructure::uploads::UploadError;

/// Message shown for every 500
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong!";

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    AuthenticationError,
    PermissionError,
    NotFoundError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::PermissionError => write!(f, "permission_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiFieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Field level validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFieldError {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for ApiFieldError {
    fn from(err: FieldError) -> Self {
        Self {
            field: err.field,
            message: err.message,
        }
    }
}

/// Internal cause of a server error, kept out of the body by default
#[derive(Debug, Clone)]
pub struct ErrorDetails(pub String);

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
    internal: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                message: message.into(),
                error_type,
                errors: None,
                param: None,
                details: None,
            },
            internal: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.param = Some(param.into());
        self
    }

    /// Details that are always shown to the client
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.response.details = Some(details.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        if !errors.is_empty() {
            self.response.errors = Some(errors.into_iter().map(ApiFieldError::from).collect());
        }
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorType::AuthenticationError, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, ApiErrorType::PermissionError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    /// Server error with the generic message; `cause` is logged, never sent
    pub fn internal(cause: impl Into<String>) -> Self {
        let mut err = Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            SERVER_ERROR_MESSAGE,
        );
        err.internal = Some(cause.into());
        err
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.response)).into_response();

        if let Some(cause) = self.internal {
            tracing::error!(status = %self.status.as_u16(), error = %cause, "Request failed");
            response.extensions_mut().insert(ErrorDetails(cause));
        }

        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::InvalidFields { message, errors } => {
                Self::bad_request(message).with_errors(errors)
            }
            DomainError::InvalidId { message } => Self::bad_request(message).with_param("id"),
            DomainError::Credential { message } => Self::unauthorized(message),
            DomainError::Conflict { message } => Self::bad_request(message),
            err @ (DomainError::Internal { .. }
            | DomainError::Storage { .. }
            | DomainError::Upload { .. }) => Self::internal(err.to_string()),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        if err.is_client_error() {
            Self::bad_request(err.to_string()).with_param("image")
        } else {
            Self::internal(err.to_string())
        }
    }
}

impl ApiError {
    /// Multipart stream failure; a tripped body limit reads as an oversized image
    pub fn from_multipart(err: MultipartError, max_image_bytes: usize) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return UploadError::TooLarge {
                max_bytes: max_image_bytes,
            }
            .into();
        }

        Self::bad_request(format!("Invalid multipart body: {}", err.body_text()))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::new(
            rejection.status(),
            ApiErrorType::InvalidRequestError,
            rejection.body_text(),
        )
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::InvalidToken(details) => Self::forbidden(message).with_details(details),
            AuthError::NotAdmin => Self::forbidden(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.response.error_type, self.response.message)
    }
}

impl std::error::Error for ApiError {}
