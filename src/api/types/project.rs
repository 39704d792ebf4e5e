//! Project representation returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Project};

use super::origin::RequestOrigin;

/// Project with an absolute `imageUrl`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub category: Category,
    pub completion_date: DateTime<Utc>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectResponse {
    pub fn from_domain(project: &Project, origin: &RequestOrigin) -> Self {
        Self {
            id: project.id().to_string(),
            title: project.title().to_string(),
            description: project.description().to_string(),
            image_url: origin.absolutize(project.image_url()),
            technologies: project.technologies().to_vec(),
            live_url: project.live_url().map(str::to_string),
            github_url: project.github_url().map(str::to_string),
            category: project.category(),
            completion_date: project.completion_date(),
            featured: project.is_featured(),
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}
