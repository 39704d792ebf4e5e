//! API middleware components

pub mod admin_auth;
pub mod error_details;
pub mod logging;
pub mod security;

pub use admin_auth::{bearer_token, RequireAdmin};
pub use error_details::error_details_middleware;
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
