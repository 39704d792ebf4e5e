//! Project service - portfolio CRUD with image lifecycle
//!
//! Uploaded images arrive as [`StagedImage`]s and are committed only after
//! the record write succeeded. Replaced and deleted images are removed
//! best-effort.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::domain::project::{
    listing_order, missing_required_fields, parse_category, parse_completion_date,
    parse_featured, parse_optional_url, parse_technologies, parse_text,
};
use crate::domain::storage::Storage;
use crate::domain::{DomainError, Project, ProjectFilter, ProjectId, ProjectValidationError};
use crate::infrastructure::uploads::{ImageStore, StagedImage};

/// Raw multipart text fields of a project form. Every field is optional
/// at this level; create enforces the required set.
#[derive(Debug, Clone, Default)]
pub struct ProjectFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub category: Option<String>,
    pub completion_date: Option<String>,
    pub featured: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
}

impl ProjectFields {
    /// Looks a value up by its form field name
    pub fn value(&self, field: &str) -> Option<&str> {
        match field {
            "title" => self.title.as_deref(),
            "description" => self.description.as_deref(),
            "technologies" => self.technologies.as_deref(),
            "category" => self.category.as_deref(),
            "completionDate" => self.completion_date.as_deref(),
            "featured" => self.featured.as_deref(),
            "liveUrl" => self.live_url.as_deref(),
            "githubUrl" => self.github_url.as_deref(),
            _ => None,
        }
    }

    /// Stores a value by form field name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "technologies" => &mut self.technologies,
            "category" => &mut self.category,
            "completionDate" => &mut self.completion_date,
            "featured" => &mut self.featured,
            "liveUrl" => &mut self.live_url,
            "githubUrl" => &mut self.github_url,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    fn required(&self, field: &'static str) -> &str {
        self.value(field).unwrap_or_default()
    }
}

/// Trait for project operations
#[async_trait]
pub trait ProjectServiceTrait: Send + Sync + Debug {
    /// Public listing in display order
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, DomainError>;

    async fn get(&self, id: &str) -> Result<Project, DomainError>;

    async fn create(
        &self,
        fields: ProjectFields,
        image: Option<StagedImage>,
    ) -> Result<Project, DomainError>;

    async fn update(
        &self,
        id: &str,
        fields: ProjectFields,
        image: Option<StagedImage>,
    ) -> Result<Project, DomainError>;

    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;

    /// Image store used to stage uploads for this service
    fn images(&self) -> &ImageStore;
}

/// Project service backed by a storage collection and the image store
#[derive(Debug)]
pub struct ProjectService<S: Storage<Project> + ?Sized> {
    storage: Arc<S>,
    images: Arc<ImageStore>,
}

impl<S: Storage<Project> + ?Sized> ProjectService<S> {
    pub fn new(storage: Arc<S>, images: Arc<ImageStore>) -> Self {
        Self { storage, images }
    }

    fn parse_id(id: &str) -> Result<ProjectId, DomainError> {
        ProjectId::new(id).map_err(DomainError::from)
    }

    fn not_found() -> DomainError {
        DomainError::not_found("Project not found")
    }

    async fn find(&self, id: &ProjectId) -> Result<Project, DomainError> {
        self.storage.get(id).await?.ok_or_else(Self::not_found)
    }

    /// Removes a stored image, logging instead of failing
    async fn discard_image(&self, reference: &str) {
        match self.images.remove(reference).await {
            Ok(true) => debug!(image_url = %reference, "Removed project image"),
            Ok(false) => debug!(image_url = %reference, "Project image already gone"),
            Err(e) => warn!(image_url = %reference, error = %e, "Failed to remove project image"),
        }
    }

    fn build(fields: &ProjectFields, image_url: &str) -> Result<Project, ProjectValidationError> {
        let missing = missing_required_fields(|field| {
            fields.value(field).is_some_and(|v| !v.trim().is_empty())
        });

        if !missing.is_empty() {
            return Err(ProjectValidationError::MissingFields { fields: missing });
        }

        let title = parse_text("title", fields.required("title"))?;
        let description = parse_text("description", fields.required("description"))?;
        let completion_date = parse_completion_date(fields.required("completionDate"))?;
        let technologies = parse_technologies(fields.required("technologies"))?;
        let category = parse_category(fields.required("category"))?;

        let project = Project::new(
            ProjectId::generate(),
            title,
            description,
            image_url,
            technologies,
            category,
            completion_date,
        )
        .with_featured(fields.featured.as_deref().is_some_and(parse_featured))
        .with_live_url(fields.live_url.as_deref().and_then(parse_optional_url))
        .with_github_url(fields.github_url.as_deref().and_then(parse_optional_url));

        Ok(project)
    }

    fn apply(project: &mut Project, fields: &ProjectFields) -> Result<(), ProjectValidationError> {
        if let Some(raw) = fields.title.as_deref() {
            project.set_title(parse_text("title", raw)?);
        }

        if let Some(raw) = fields.description.as_deref() {
            project.set_description(parse_text("description", raw)?);
        }

        if let Some(raw) = fields.completion_date.as_deref() {
            project.set_completion_date(parse_completion_date(raw)?);
        }

        if let Some(raw) = fields.technologies.as_deref() {
            project.set_technologies(parse_technologies(raw)?);
        }

        if let Some(raw) = fields.category.as_deref() {
            project.set_category(parse_category(raw)?);
        }

        if let Some(raw) = fields.featured.as_deref() {
            project.set_featured(parse_featured(raw));
        }

        if let Some(raw) = fields.live_url.as_deref() {
            project.set_live_url(parse_optional_url(raw));
        }

        if let Some(raw) = fields.github_url.as_deref() {
            project.set_github_url(parse_optional_url(raw));
        }

        Ok(())
    }
}

#[async_trait]
impl<S: Storage<Project> + ?Sized> ProjectServiceTrait for ProjectService<S> {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, DomainError> {
        let mut projects: Vec<Project> = self
            .storage
            .list()
            .await?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();

        projects.sort_by(listing_order);
        Ok(projects)
    }

    async fn get(&self, id: &str) -> Result<Project, DomainError> {
        let project_id = Self::parse_id(id)?;
        self.find(&project_id).await
    }

    async fn create(
        &self,
        fields: ProjectFields,
        image: Option<StagedImage>,
    ) -> Result<Project, DomainError> {
        let image = image.ok_or(ProjectValidationError::ImageRequired)?;
        let project = Self::build(&fields, image.image_url())?;

        let project = self.storage.create(project).await?;

        if let Err(e) = image.commit().await {
            error!(project_id = %project.id(), error = %e, "Failed to store project image");
            if let Err(revert) = self.storage.delete(project.id()).await {
                warn!(project_id = %project.id(), error = %revert, "Failed to revert project create");
            }
            return Err(DomainError::upload(e.to_string()));
        }

        info!(project_id = %project.id(), title = %project.title(), "Project created");
        Ok(project)
    }

    async fn update(
        &self,
        id: &str,
        fields: ProjectFields,
        image: Option<StagedImage>,
    ) -> Result<Project, DomainError> {
        let project_id = Self::parse_id(id)?;
        let existing = self.find(&project_id).await?;

        let mut project = existing.clone();
        Self::apply(&mut project, &fields)?;

        if let Some(staged) = &image {
            project.set_image_url(staged.image_url());
        }

        let project = self.storage.update(project).await?;

        if let Some(staged) = image {
            if let Err(e) = staged.commit().await {
                error!(project_id = %project_id, error = %e, "Failed to store project image");
                if let Err(revert) = self.storage.update(existing).await {
                    warn!(project_id = %project_id, error = %revert, "Failed to revert project update");
                }
                return Err(DomainError::upload(e.to_string()));
            }

            self.discard_image(existing.image_url()).await;
        }

        info!(project_id = %project_id, "Project updated");
        Ok(project)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let project_id = Self::parse_id(id)?;
        let project = self.find(&project_id).await?;

        self.discard_image(project.image_url()).await;

        if !self.storage.delete(&project_id).await? {
            return Err(Self::not_found());
        }

        info!(project_id = %project_id, "Project deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.storage.ping().await
    }

    fn images(&self) -> &ImageStore {
        &self.images
    }
}
