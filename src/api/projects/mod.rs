//! Project endpoints
//!
//! Listing and detail are public. Create, update and delete require an
//! admin token and take multipart forms with an optional `image` part.

mod form;

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse, ProjectResponse, RequestOrigin};
use crate::domain::{Category, ProjectFilter};

pub use form::{ProjectForm, IMAGE_FIELD};

/// Allowance for the text parts around the image
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_projects_router(max_file_size: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .layer(DefaultBodyLimit::max(max_file_size + FORM_OVERHEAD_BYTES))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
}

impl ListProjectsQuery {
    /// None when the category names nothing we have
    fn filter(&self) -> Option<ProjectFilter> {
        let mut filter = ProjectFilter::new();

        if let Some(raw) = self.category.as_deref().map(str::trim) {
            if !raw.is_empty() && raw != "All" {
                filter = filter.with_category(raw.parse::<Category>().ok()?);
            }
        }

        if self.featured.as_deref() == Some("true") {
            filter = filter.featured_only();
        }

        Some(filter)
    }
}

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let Some(filter) = query.filter() else {
        debug!(category = ?query.category, "Unknown project category requested");
        return Ok(Json(Vec::new()));
    };

    let projects = state.project_service.list(filter).await?;

    Ok(Json(
        projects
            .iter()
            .map(|p| ProjectResponse::from_domain(p, &origin))
            .collect(),
    ))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state.project_service.get(&id).await?;
    Ok(Json(ProjectResponse::from_domain(&project, &origin)))
}

/// POST /api/projects
pub async fn create_project(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    origin: RequestOrigin,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let form = ProjectForm::read(multipart?, state.project_service.images()).await?;
    let project = state.project_service.create(form.fields, form.image).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse::from_domain(&project, &origin)),
    ))
}

/// PUT /api/projects/{id}
pub async fn update_project(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    origin: RequestOrigin,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let form = ProjectForm::read(multipart?, state.project_service.images()).await?;
    let project = state
        .project_service
        .update(&id, form.fields, form.image)
        .await?;

    Ok(Json(ProjectResponse::from_domain(&project, &origin)))
}

/// DELETE /api/projects/{id}
pub async fn delete_project(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.project_service.delete(&id).await?;

    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: Option<&str>, featured: Option<&str>) -> ListProjectsQuery {
        ListProjectsQuery {
            category: category.map(str::to_string),
            featured: featured.map(str::to_string),
        }
    }

    #[test]
    fn test_filter_from_query() {
        assert_eq!(query(None, None).filter(), Some(ProjectFilter::new()));
        assert_eq!(query(Some("All"), None).filter(), Some(ProjectFilter::new()));
        assert_eq!(
            query(Some("Mobile App"), Some("true")).filter(),
            Some(
                ProjectFilter::new()
                    .with_category(Category::MobileApp)
                    .featured_only()
            )
        );
        assert_eq!(
            query(None, Some("yes")).filter(),
            Some(ProjectFilter::new())
        );
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        assert_eq!(query(Some("Games"), None).filter(), None);
    }
}
