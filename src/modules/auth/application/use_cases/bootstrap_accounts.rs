use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::NewUser;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_USERNAME: &str = "test";
pub const TEST_EMAIL: &str = "test@example.com";

/// Passwords for the seeded accounts.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub admin_password: String,
    pub test_password: String,
}

impl BootstrapConfig {
    /// `BOOTSTRAP_ADMIN_PASSWORD` / `BOOTSTRAP_TEST_PASSWORD`.
    pub fn from_env() -> Self {
        Self {
            admin_password: std::env::var("BOOTSTRAP_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
            test_password: std::env::var("BOOTSTRAP_TEST_PASSWORD")
                .unwrap_or_else(|_| "password".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub admin_created: bool,
    pub test_created: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IBootstrapAccountsUseCase: Send + Sync {
    async fn execute(&self, config: &BootstrapConfig) -> Result<BootstrapReport, BootstrapError>;
}

/// Seeds an admin (when no admin exists) and a verified `test` account
/// (when the username is free). Safe to run on every startup.
pub struct BootstrapAccountsUseCase<R, Q>
where
    R: UserRepository,
    Q: UserQuery,
{
    repository: R,
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R, Q> BootstrapAccountsUseCase<R, Q>
where
    R: UserRepository,
    Q: UserQuery,
{
    pub fn new(repository: R, query: Q, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            query,
            password_hasher,
        }
    }

    async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<bool, BootstrapError> {
        let password_hash = self
            .password_hasher
            .hash_password(password)
            .await
            .map_err(|e| BootstrapError::HashingFailed(e.to_string()))?;

        match self
            .repository
            .create_user(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                is_admin,
                email_verified: true,
            })
            .await
        {
            Ok(user) => {
                info!(user_id = %user.id, username, is_admin, "Bootstrap account created");
                Ok(true)
            }
            // Lost a race with another instance
            Err(UserRepositoryError::UsernameTaken) => Ok(false),
            Err(UserRepositoryError::DatabaseError(msg)) => {
                Err(BootstrapError::RepositoryError(msg))
            }
        }
    }
}

#[async_trait]
impl<R, Q> IBootstrapAccountsUseCase for BootstrapAccountsUseCase<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, config: &BootstrapConfig) -> Result<BootstrapReport, BootstrapError> {
        let mut report = BootstrapReport::default();

        let admin_exists = self
            .query
            .admin_exists()
            .await
            .map_err(|e| BootstrapError::RepositoryError(e.to_string()))?;
        if !admin_exists {
            report.admin_created = self
                .create(ADMIN_USERNAME, ADMIN_EMAIL, &config.admin_password, true)
                .await?;
        }

        let test_exists = self
            .query
            .find_by_username(TEST_USERNAME)
            .await
            .map_err(|e| BootstrapError::RepositoryError(e.to_string()))?
            .is_some();
        if !test_exists {
            report.test_created = self
                .create(TEST_USERNAME, TEST_EMAIL, &config.test_password, false)
                .await?;
        }

        Ok(report)
    }
}
