use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::VerificationPurpose;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifyError {
    #[error("Failed to deliver verification code: {0}")]
    DeliveryFailed(String),
}

/// Outbound delivery of a freshly issued code.
#[async_trait]
pub trait VerificationCodeNotifier: Send + Sync {
    async fn send_code(
        &self,
        email: &str,
        code: &str,
        purpose: VerificationPurpose,
    ) -> Result<(), NotifyError>;
}
