//! Admin identity - the single configured site operator

use serde::{Deserialize, Serialize};

/// Role string carried by admin tokens
pub const ADMIN_ROLE: &str = "admin";

/// Fixed subject id of the configured admin
pub const ADMIN_ID: &str = "1";

/// Authenticated caller as seen by protected handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub role: String,
}

impl AdminIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: ADMIN_ID.to_string(),
            email: email.into(),
            role: ADMIN_ROLE.to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}
