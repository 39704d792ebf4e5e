use std::path::PathBuf;

use serde::Deserialize;

/// Fallback admin email used when none is configured
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// Fallback plaintext admin password used when neither a password nor a hash is configured
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Fallback token signing secret
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// Plain environment variables honoured on top of the `APP__*` ones, in precedence order
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("PUBLIC_URL", "server.public_url"),
    ("NODE_ENV", "server.environment"),
    ("APP_ENV", "server.environment"),
    ("ADMIN_EMAIL", "admin.email"),
    ("ADMIN_PASSWORD", "admin.password"),
    ("ADMIN_PASSWORD_HASH", "admin.password_hash"),
    ("JWT_SECRET", "auth.jwt_secret"),
    ("DATABASE_URL", "storage.url"),
];

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub admin: AdminConfig,
    pub storage: StorageSettings,
    pub uploads: UploadsConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin used for absolute image URLs; derived from request headers when unset
    pub public_url: Option<String>,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[serde(alias = "dev")]
    Development,
    #[default]
    #[serde(alias = "prod")]
    Production,
    Test,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
}

/// Single admin credential. A plaintext password and a hash may both be set;
/// either one matching is enough.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    pub password: Option<String>,
    pub password_hash: Option<String>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[hidden]"))
            .field("password_hash", &self.password_hash.as_ref().map(|_| "[hidden]"))
            .finish()
    }
}

impl AdminConfig {
    /// Plaintext password to compare against, falling back to the built-in
    /// default only when no hash is configured either
    pub fn effective_password(&self) -> Option<&str> {
        match (&self.password, &self.password_hash) {
            (Some(password), _) => Some(password.as_str()),
            (None, Some(_)) => None,
            (None, None) => Some(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `memory` or `postgres`
    pub backend: String,
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    /// Directory served as static files; images land in `<public_dir>/uploads/projects`
    pub public_dir: PathBuf,
    pub max_file_size: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Empty mirrors the request origin
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            public_url: None,
            environment: Environment::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_expiration_hours: 24,
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: None,
            password_hash: None,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            url: None,
            max_connections: 10,
        }
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            max_file_size: 5 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            );

        for (key, value) in legacy_overrides(|name| std::env::var(name).ok()) {
            builder = builder.set_override(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Names of the built-in insecure defaults still in effect
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        let mut in_use = Vec::new();

        if self.auth.jwt_secret == DEFAULT_JWT_SECRET {
            in_use.push("auth.jwt_secret");
        }

        if self.admin.email == DEFAULT_ADMIN_EMAIL {
            in_use.push("admin.email");
        }

        if self.admin.password.is_none() && self.admin.password_hash.is_none() {
            in_use.push("admin.password");
        }

        in_use
    }
}

/// Maps the plain environment variables onto configuration keys. Empty values are ignored.
/// A database URL also switches the storage backend to postgres.
fn legacy_overrides(lookup: impl Fn(&str) -> Option<String>) -> Vec<(&'static str, String)> {
    let mut overrides = Vec::new();

    for (name, key) in LEGACY_ENV_KEYS {
        let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) else {
            continue;
        };

        if *key == "storage.url" {
            overrides.push(("storage.backend", "postgres".to_string()));
        }

        overrides.push((*key, value));
    }

    overrides
}
