use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{CodeRejection, VerificationPurpose};
use crate::auth::application::ports::outgoing::{UserRepository, VerificationCodeRepository};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyCodeError {
    #[error("No active verification code for this email")]
    CodeNotFound,
    #[error("Verification code has expired")]
    Expired,
    #[error("Too many verification attempts")]
    AttemptsExceeded,
    #[error("Verification code is incorrect")]
    InvalidCode,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CodeRejection> for VerifyCodeError {
    fn from(rejection: CodeRejection) -> Self {
        match rejection {
            CodeRejection::Expired => VerifyCodeError::Expired,
            CodeRejection::AttemptsExceeded => VerifyCodeError::AttemptsExceeded,
        }
    }
}

#[async_trait]
pub trait IVerifyCodeUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        purpose: VerificationPurpose,
        code: &str,
    ) -> Result<(), VerifyCodeError>;
}

pub struct VerifyCodeUseCase<C, U>
where
    C: VerificationCodeRepository,
    U: UserRepository,
{
    codes: C,
    users: U,
}

impl<C, U> VerifyCodeUseCase<C, U>
where
    C: VerificationCodeRepository,
    U: UserRepository,
{
    pub fn new(codes: C, users: U) -> Self {
        Self { codes, users }
    }
}

#[async_trait]
impl<C, U> IVerifyCodeUseCase for VerifyCodeUseCase<C, U>
where
    C: VerificationCodeRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        purpose: VerificationPurpose,
        code: &str,
    ) -> Result<(), VerifyCodeError> {
        let email = email.trim().to_lowercase();

        let stored = self
            .codes
            .find_active(&email, purpose)
            .await
            .map_err(|e| VerifyCodeError::RepositoryError(e.to_string()))?
            .ok_or(VerifyCodeError::CodeNotFound)?;

        let now = Utc::now();
        stored.check_consumable(now)?;

        // Every submission counts against the budget, matching or not. A
        // concurrent submission may have spent the last attempt since the read.
        let counted = self
            .codes
            .record_attempt(stored.id, now)
            .await
            .map_err(|e| VerifyCodeError::RepositoryError(e.to_string()))?;
        if !counted {
            return Err(VerifyCodeError::AttemptsExceeded);
        }

        if !stored.matches(code) {
            warn!(email = %email, purpose = purpose.as_str(), "Verification code mismatch");
            return Err(VerifyCodeError::InvalidCode);
        }

        let consumed = self
            .codes
            .consume(stored.id)
            .await
            .map_err(|e| VerifyCodeError::RepositoryError(e.to_string()))?;
        if !consumed {
            return Err(VerifyCodeError::CodeNotFound);
        }

        if purpose == VerificationPurpose::Registration {
            let updated = self
                .users
                .mark_email_verified(&email)
                .await
                .map_err(|e| VerifyCodeError::RepositoryError(e.to_string()))?;
            info!(email = %email, accounts = updated, "Email verified");
        }

        Ok(())
    }
}
