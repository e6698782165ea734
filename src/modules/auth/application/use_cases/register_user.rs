use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::NewUser;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserRepository, UserRepositoryError,
};

use super::auth_session::{issue_session, AuthSession};

const MIN_USERNAME_LEN: usize = 3;
const MAX_USERNAME_LEN: usize = 50;
const MIN_PASSWORD_LEN: usize = 6;

// ========================= Register Request =========================

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    username: String,
    password: String,
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("Username must be between 3 and 50 characters")]
    InvalidUsername,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Invalid email format")]
    InvalidEmail,
}

impl RegisterUserRequest {
    pub fn new(
        username: String,
        password: String,
        email: String,
    ) -> Result<Self, RegisterRequestError> {
        let username = username.trim().to_string();
        let len = username.chars().count();
        if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
            return Err(RegisterRequestError::InvalidUsername);
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmail);
        }

        Ok(Self {
            username,
            password,
            email,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterUserRequest) -> Result<AuthSession, RegisterUserError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterUserRequest) -> Result<AuthSession, RegisterUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(NewUser {
                username: request.username,
                email: request.email,
                password_hash,
                is_admin: false,
                email_verified: false,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => RegisterUserError::UsernameTaken,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        issue_session(self.token_provider.as_ref(), user)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))
    }
}
