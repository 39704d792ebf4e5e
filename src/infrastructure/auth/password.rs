//! Password hashing and verification

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use std::fmt::Debug;
use subtle::ConstantTimeEq;

use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Verifier for bcrypt hashes (`$2a$`, `$2b$`, `$2y$`)
#[derive(Debug, Clone, Default)]
pub struct BcryptVerifier;

impl BcryptVerifier {
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

/// Hash formats accepted for the configured admin password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    Bcrypt,
    Argon2,
}

impl HashScheme {
    pub fn detect(hash: &str) -> Option<Self> {
        if hash.starts_with("$2a$") || hash.starts_with("$2b$") || hash.starts_with("$2y$") {
            Some(Self::Bcrypt)
        } else if hash.starts_with("$argon2") {
            Some(Self::Argon2)
        } else {
            None
        }
    }
}

/// Checks a password against a stored hash of either supported scheme.
/// Unknown formats never verify.
pub fn verify_password_hash(password: &str, hash: &str) -> bool {
    match HashScheme::detect(hash) {
        Some(HashScheme::Bcrypt) => BcryptVerifier.verify(password, hash),
        Some(HashScheme::Argon2) => Argon2Hasher.verify(password, hash),
        None => false,
    }
}

/// Compares two secrets without early exit on the first differing byte
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("my_secure_password").unwrap();

        assert!(hasher.verify("my_secure_password", &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_unique() {
        let hasher = Argon2Hasher::new();

        let hash1 = hasher.hash("pw").unwrap();
        let hash2 = hasher.hash("pw").unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify("pw", &hash1));
        assert!(hasher.verify("pw", &hash2));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("password", "invalid_hash_format"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_detect_scheme() {
        assert_eq!(HashScheme::detect("$2a$10$abc"), Some(HashScheme::Bcrypt));
        assert_eq!(HashScheme::detect("$2b$12$abc"), Some(HashScheme::Bcrypt));
        assert_eq!(
            HashScheme::detect("$argon2id$v=19$m=19456,t=2,p=1$abc"),
            Some(HashScheme::Argon2)
        );
        assert_eq!(HashScheme::detect("plaintext"), None);
    }

    #[test]
    fn test_verify_bcrypt_hash() {
        let hash = bcrypt::hash("admin123", 4).unwrap();

        assert!(verify_password_hash("admin123", &hash));
        assert!(!verify_password_hash("admin124", &hash));
    }

    #[test]
    fn test_verify_argon2_hash() {
        let hash = Argon2Hasher::new().hash("s3cret").unwrap();

        assert!(verify_password_hash("s3cret", &hash));
        assert!(!verify_password_hash("S3cret", &hash));
    }

    #[test]
    fn test_unknown_hash_never_verifies() {
        assert!(!verify_password_hash("admin123", "admin123"));
        assert!(!verify_password_hash("", ""));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq("admin123", "admin123"));
        assert!(!constant_time_eq("admin123", "admin124"));
        assert!(!constant_time_eq("admin123", "admin1234"));
        assert!(constant_time_eq("", ""));
    }
}
