//! Authentication infrastructure module
//!
//! Admin credential verification, password hashing and JWT handling.

mod credentials;
mod jwt;
mod password;

pub use credentials::AdminCredentials;
pub use jwt::{AdminClaims, IssuedToken, JwtConfig, JwtGenerator, JwtService};
pub use password::{
    constant_time_eq, verify_password_hash, Argon2Hasher, BcryptVerifier, HashScheme,
    PasswordHasher,
};
