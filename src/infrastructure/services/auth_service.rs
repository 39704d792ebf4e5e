//! Auth service - admin login and bearer token checks

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{AdminIdentity, DomainError};
use crate::infrastructure::auth::{AdminCredentials, IssuedToken, JwtGenerator};

/// Returned for both an unknown email and a wrong password
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Login form as received
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user: AdminIdentity,
    pub token: IssuedToken,
}

/// Bearer token rejection reasons
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid or expired token")]
    InvalidToken(String),

    #[error("Admin access required")]
    NotAdmin,
}

/// Trait for authentication operations
#[async_trait]
pub trait AuthServiceTrait: Send + Sync + Debug {
    async fn login(&self, request: LoginRequest) -> Result<AdminSession, DomainError>;

    /// Verifies a bearer token and requires the admin role
    fn authorize(&self, token: &str) -> Result<AdminIdentity, AuthError>;
}

/// Auth service for the single configured admin
#[derive(Debug)]
pub struct AuthService {
    credentials: AdminCredentials,
    tokens: Arc<dyn JwtGenerator>,
}

impl AuthService {
    pub fn new(credentials: AdminCredentials, tokens: Arc<dyn JwtGenerator>) -> Self {
        Self {
            credentials,
            tokens,
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, request: LoginRequest) -> Result<AdminSession, DomainError> {
        let (Some(email), Some(password)) = (present(request.email), present(request.password))
        else {
            return Err(DomainError::validation("Email and password are required"));
        };

        // bcrypt and argon2 verification is CPU bound
        let credentials = self.credentials.clone();
        let attempted = email.clone();
        let identity = tokio::task::spawn_blocking(move || credentials.verify(&attempted, &password))
            .await
            .map_err(|e| DomainError::internal(format!("Credential check failed: {}", e)))?;

        let Some(user) = identity else {
            warn!(email = %email.trim(), "Rejected admin login");
            return Err(DomainError::credential(INVALID_CREDENTIALS_MESSAGE));
        };

        let token = self.tokens.generate(&user)?;
        info!(email = %user.email, expires_at = %token.expires_at, "Admin logged in");

        Ok(AdminSession { user, token })
    }

    fn authorize(&self, token: &str) -> Result<AdminIdentity, AuthError> {
        let claims = self
            .tokens
            .validate(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let identity = claims.identity();
        if !identity.is_admin() {
            return Err(AuthError::NotAdmin);
        }

        Ok(identity)
    }
}
