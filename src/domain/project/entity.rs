//! Project entity and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_project_id, ProjectValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Project identifier (UUID string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(String);

impl ProjectId {
    /// Create a ProjectId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ProjectValidationError> {
        let id = id.into();
        validate_project_id(&id)?;
        Ok(Self(id))
    }

    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectId {
    type Error = ProjectValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for ProjectId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Portfolio category; serialized with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "Desktop App")]
    DesktopApp,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::WebDevelopment,
        Self::MobileApp,
        Self::DesktopApp,
        Self::UiUxDesign,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::MobileApp => "Mobile App",
            Self::DesktopApp => "Desktop App",
            Self::UiUxDesign => "UI/UX Design",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = ProjectValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ProjectValidationError::InvalidCategory {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portfolio project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    id: ProjectId,
    title: String,
    description: String,
    /// Site-relative path of the stored image (`/uploads/projects/<file>`)
    image_url: String,
    technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    github_url: Option<String>,
    category: Category,
    completion_date: DateTime<Utc>,
    #[serde(default)]
    featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        technologies: Vec<String>,
        category: Category,
        completion_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            technologies,
            live_url: None,
            github_url: None,
            category,
            completion_date,
            featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_live_url(mut self, url: Option<String>) -> Self {
        self.live_url = url;
        self
    }

    pub fn with_github_url(mut self, url: Option<String>) -> Self {
        self.github_url = url;
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn live_url(&self) -> Option<&str> {
        self.live_url.as_deref()
    }

    pub fn github_url(&self) -> Option<&str> {
        self.github_url.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn completion_date(&self) -> DateTime<Utc> {
        self.completion_date
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        self.image_url = image_url.into();
        self.touch();
    }

    pub fn set_technologies(&mut self, technologies: Vec<String>) {
        self.technologies = technologies;
        self.touch();
    }

    pub fn set_live_url(&mut self, url: Option<String>) {
        self.live_url = url;
        self.touch();
    }

    pub fn set_github_url(&mut self, url: Option<String>) {
        self.github_url = url;
        self.touch();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.touch();
    }

    pub fn set_completion_date(&mut self, date: DateTime<Utc>) {
        self.completion_date = date;
        self.touch();
    }

    pub fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Project {
    type Key = ProjectId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
