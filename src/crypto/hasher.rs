//! Password Hasher
//! Mission: One-way hash plaintext secrets and verify them against stored hashes

use anyhow::{Context, Result};
use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashing contract consumed by the workflows.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// One-way hash of a plaintext secret.
    async fn hash(&self, plaintext: &str) -> Result<String>;

    /// Compare a plaintext secret against a stored hash.
    async fn compare(&self, plaintext: &str, hashed: &str) -> Result<bool>;
}

/// bcrypt-backed hasher
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, plaintext: &str) -> Result<String> {
        hash(plaintext, self.cost).context("Failed to hash password")
    }

    async fn compare(&self, plaintext: &str, hashed: &str) -> Result<bool> {
        verify(plaintext, hashed).context("Failed to verify password")
    }
}
