//! Authentication API endpoints
//!
//! Login for the configured admin and a token check for the site client.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::AdminIdentity;
use crate::infrastructure::services::LoginRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(get_current_admin))
}

/// Login body; missing fields are reported by the service, not the extractor
#[derive(Debug, Default, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: AdminIdentity,
    pub expires_at: DateTime<Utc>,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state
        .auth_service
        .login(LoginRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: session.token.token,
        user: session.user,
        expires_at: session.token.expires_at,
    }))
}

/// GET /api/auth/me
pub async fn get_current_admin(
    RequireAdmin(identity): RequireAdmin,
) -> Result<Json<AdminIdentity>, ApiError> {
    Ok(Json(identity))
}
