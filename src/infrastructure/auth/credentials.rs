//! Configured admin credential check

use crate::config::AdminConfig;
use crate::domain::AdminIdentity;

use super::password::{constant_time_eq, verify_password_hash};

/// The single admin login, resolved from configuration at startup
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password: Option<String>,
    password_hash: Option<String>,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("has_password", &self.password.is_some())
            .field("has_password_hash", &self.password_hash.is_some())
            .finish()
    }
}

impl AdminCredentials {
    pub fn new(
        email: impl Into<String>,
        password: Option<String>,
        password_hash: Option<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password,
            password_hash,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the admin identity when both the email and one of the
    /// configured secrets match. The plaintext fallback is tried first.
    pub fn verify(&self, email: &str, password: &str) -> Option<AdminIdentity> {
        if email.trim() != self.email {
            return None;
        }

        let plaintext_ok = self
            .password
            .as_deref()
            .is_some_and(|expected| constant_time_eq(password, expected));

        let hash_ok = || {
            self.password_hash
                .as_deref()
                .is_some_and(|hash| verify_password_hash(password, hash))
        };

        (plaintext_ok || hash_ok()).then(|| AdminIdentity::new(self.email.clone()))
    }
}

impl From<&AdminConfig> for AdminCredentials {
    fn from(config: &AdminConfig) -> Self {
        Self::new(
            config.email.trim(),
            config.effective_password().map(str::to_string),
            config.password_hash.clone(),
        )
    }
}
