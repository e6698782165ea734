use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("password hashing failed")]
    HashFailed,

    #[error("stored password hash is unreadable")]
    VerifyFailed,

    #[error("hashing worker failed")]
    TaskFailed,
}

/// Credential check used by login and account creation.
/// `verify_password` returns `Ok(false)` for a wrong password and reserves
/// `Err` for malformed hashes or worker failures.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
