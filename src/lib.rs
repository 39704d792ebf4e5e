//! Studio Site API
//!
//! Backend for a studio portfolio site:
//! - Public contact inquiries and project showcase
//! - Single-admin JWT login for managing both
//! - Project images stored on disk and served under `/uploads`

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use axum::Router;
use tracing::{info, warn};

use api::state::AppState;
use domain::{Inquiry, Project};
use infrastructure::{
    auth::{AdminCredentials, JwtConfig, JwtService},
    services::{AuthService, InquiryService, ProjectService},
    storage::{StorageConfig, StorageFactory, INQUIRIES_TABLE, PROJECTS_TABLE},
    uploads::ImageStore,
};

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    report_insecure_defaults(config);

    let storage_config = StorageConfig::from_settings(&config.storage)?;
    info!("Storage backend: {:?}", storage_config.storage_type());

    let factory = StorageFactory::connect(&storage_config).await?;
    let inquiry_storage = factory.collection::<Inquiry>(INQUIRIES_TABLE).await?;
    let project_storage = factory.collection::<Project>(PROJECTS_TABLE).await?;

    let images = Arc::new(ImageStore::new(
        &config.uploads.public_dir,
        config.uploads.max_file_size,
    ));
    images.ensure_directories().await?;
    info!(directory = %images.directory().display(), "Upload directory ready");

    let credentials = AdminCredentials::from(&config.admin);
    info!(email = %credentials.email(), "Admin account configured");
    let tokens = Arc::new(JwtService::new(JwtConfig::from(&config.auth)));

    let state = AppState::new(
        Arc::new(InquiryService::new(inquiry_storage)),
        Arc::new(ProjectService::new(project_storage, images)),
        Arc::new(AuthService::new(credentials, tokens)),
    )
    .with_public_url(config.server.public_url.clone())
    .with_environment(config.server.environment);

    Ok(state)
}

/// Build the complete application router from configuration
pub async fn create_app(config: &AppConfig) -> anyhow::Result<Router> {
    let state = create_app_state_with_config(config).await?;
    Ok(api::create_router(state, config))
}

fn report_insecure_defaults(config: &AppConfig) {
    for key in config.insecure_defaults() {
        warn!(setting = key, "Using built-in insecure default, override it before deploying");
    }
}
