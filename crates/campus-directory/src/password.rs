//! Password hashing seam
//!
//! Real password hashing is an external collaborator; handlers only see
//! this trait. [`Sha256Hasher`] is an unsalted digest standing in for the
//! external KDF in tests and single-process setups.

use sha2::{Digest, Sha256};

/// Hashes and verifies passwords
pub trait PasswordHasher: Send + Sync {
    /// Hash a password for storage
    fn hash(&self, password: &str) -> String;

    /// Check a password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Unsalted SHA-256 stand-in, not a production hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        self.hash(password) == hash
    }
}
