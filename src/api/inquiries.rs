//! Inquiry endpoints
//!
//! Submission is public; listing and triage require an admin token.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Router,
};
use serde::Deserialize;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse};
use crate::domain::Inquiry;
use crate::infrastructure::services::{CreateInquiryRequest, UpdateInquiryRequest};

pub fn create_inquiries_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inquiries).post(create_inquiry))
        .route("/{id}", patch(update_inquiry).delete(delete_inquiry))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateInquiryBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

impl From<CreateInquiryBody> for CreateInquiryRequest {
    fn from(body: CreateInquiryBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            phone: body.phone,
            company: body.company,
            message: body.message,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateInquiryBody {
    pub status: Option<String>,
}

/// POST /api/inquiries
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(body): Json<CreateInquiryBody>,
) -> Result<(StatusCode, Json<Inquiry>), ApiError> {
    let inquiry = state.inquiry_service.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// GET /api/inquiries
pub async fn list_inquiries(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Inquiry>>, ApiError> {
    Ok(Json(state.inquiry_service.list().await?))
}

/// PATCH /api/inquiries/{id}
pub async fn update_inquiry(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateInquiryBody>,
) -> Result<Json<Inquiry>, ApiError> {
    let inquiry = state
        .inquiry_service
        .update_status(&id, UpdateInquiryRequest { status: body.status })
        .await?;

    Ok(Json(inquiry))
}

/// DELETE /api/inquiries/{id}
pub async fn delete_inquiry(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.inquiry_service.delete(&id).await?;

    Ok(Json(MessageResponse::new("Inquiry deleted successfully")))
}
