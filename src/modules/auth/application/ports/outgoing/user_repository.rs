use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Flags every account registered under `email` as verified.
    /// Returns the number of rows touched.
    async fn mark_email_verified(&self, email: &str) -> Result<u64, UserRepositoryError>;
}

#[derive(Debug, Clone)]
pub enum UserRepositoryError {
    UsernameTaken,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UsernameTaken => write!(f, "Username already exists"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}
