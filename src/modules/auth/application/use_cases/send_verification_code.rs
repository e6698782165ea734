use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use rand::rngs::OsRng;
use std::sync::Arc;

use crate::auth::application::domain::entities::{
    generate_verification_code, VerificationCode, VerificationPurpose,
};
use crate::auth::application::ports::outgoing::{
    VerificationCodeNotifier, VerificationCodeRepository,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendVerificationCodeError {
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISendVerificationCodeUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        purpose: VerificationPurpose,
    ) -> Result<(), SendVerificationCodeError>;
}

pub struct SendVerificationCodeUseCase<R>
where
    R: VerificationCodeRepository,
{
    repository: R,
    notifier: Arc<dyn VerificationCodeNotifier>,
}

impl<R> SendVerificationCodeUseCase<R>
where
    R: VerificationCodeRepository,
{
    pub fn new(repository: R, notifier: Arc<dyn VerificationCodeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R> ISendVerificationCodeUseCase for SendVerificationCodeUseCase<R>
where
    R: VerificationCodeRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        purpose: VerificationPurpose,
    ) -> Result<(), SendVerificationCodeError> {
        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(SendVerificationCodeError::InvalidEmail);
        }

        let code = generate_verification_code(&mut OsRng);
        let created_at = Utc::now();

        self.repository
            .replace_code(
                &email,
                purpose,
                &code,
                created_at,
                VerificationCode::expiry_for(created_at),
            )
            .await
            .map_err(|e| SendVerificationCodeError::RepositoryError(e.to_string()))?;

        self.notifier
            .send_code(&email, &code, purpose)
            .await
            .map_err(|e| SendVerificationCodeError::DeliveryFailed(e.to_string()))
    }
}
