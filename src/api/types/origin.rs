//! External origin of the current request, used to absolutize image paths

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::api::state::AppState;

/// `scheme://host` the client reached us on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin(pub String);

impl RequestOrigin {
    /// Origin from forwarding headers, falling back to `Host`
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let scheme = first("x-forwarded-proto").unwrap_or("http");
        let host = first("x-forwarded-host")
            .or_else(|| first(header::HOST.as_str()))
            .unwrap_or("localhost");

        Self(format!("{}://{}", scheme, host))
    }

    /// Prefixes site-relative paths; absolute URLs pass through
    pub fn absolutize(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        format!("{}{}", self.0, path)
    }
}

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(match &state.public_url {
            Some(url) => Self(url.clone()),
            None => Self::from_headers(&parts.headers),
        })
    }
}
