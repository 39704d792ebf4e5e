mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AuthConfig, CorsConfig, Environment, LogFormat, LoggingConfig,
    ServerConfig, StorageSettings, UploadsConfig, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD,
    DEFAULT_JWT_SECRET,
};
