//! Admin authentication extractor
//!
//! Protected handlers take [`RequireAdmin`] as an argument. The bearer token
//! from `Authorization` is verified and must carry the admin role.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::AdminIdentity;

/// Extractor that requires a valid admin bearer token
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AdminIdentity);

/// Token from `Authorization: Bearer <token>`, if present and non-empty
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Authentication token required"))?;

        let identity = state.auth_service.authorize(token)?;
        debug!(email = %identity.email, "Admin access via JWT");

        Ok(RequireAdmin(identity))
    }
}
