//! Application state for shared services

use std::sync::Arc;

use crate::config::Environment;
use crate::infrastructure::services::{
    AuthServiceTrait, InquiryServiceTrait, ProjectServiceTrait,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub inquiry_service: Arc<dyn InquiryServiceTrait>,
    pub project_service: Arc<dyn ProjectServiceTrait>,
    pub auth_service: Arc<dyn AuthServiceTrait>,
    /// Configured external base URL for absolute image links
    pub public_url: Option<String>,
    pub environment: Environment,
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        inquiry_service: Arc<dyn InquiryServiceTrait>,
        project_service: Arc<dyn ProjectServiceTrait>,
        auth_service: Arc<dyn AuthServiceTrait>,
    ) -> Self {
        Self {
            inquiry_service,
            project_service,
            auth_service,
            public_url: None,
            environment: Environment::default(),
        }
    }

    pub fn with_public_url(mut self, public_url: Option<String>) -> Self {
        self.public_url = public_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}
