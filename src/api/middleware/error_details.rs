//! Exposes server error causes in development
//!
//! Installed only when the environment is `development`. A response carrying
//! an [`ErrorDetails`] extension gets the cause copied into the `details`
//! field of its JSON body.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use tracing::debug;

use crate::api::types::ErrorDetails;

/// Error bodies are small; anything larger is passed through untouched
const MAX_ERROR_BODY: usize = 64 * 1024;

pub async fn error_details_middleware(request: Request<Body>, next: Next) -> Response {
    let response = next.run(request).await;

    let Some(ErrorDetails(cause)) = response.extensions().get::<ErrorDetails>().cloned() else {
        return response;
    };

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_ERROR_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "Could not buffer error body");
            return Response::from_parts(parts, Body::empty());
        }
    };

    let Ok(mut json) = serde_json::from_slice::<Value>(&bytes) else {
        return Response::from_parts(parts, Body::from(bytes));
    };

    if let Some(object) = json.as_object_mut() {
        object.insert("details".to_string(), Value::String(cause));
    }

    let body = json.to_string();
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(body))
}
