use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::domain::entities::{
    VerificationCode, VerificationPurpose,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerificationCodeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Deletes every earlier code for `(email, purpose)` and stores the new
    /// one in the same transaction.
    async fn replace_code(
        &self,
        email: &str,
        purpose: VerificationPurpose,
        code: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<VerificationCode, VerificationCodeRepositoryError>;

    /// Latest unused code for the pair, if any.
    async fn find_active(
        &self,
        email: &str,
        purpose: VerificationPurpose,
    ) -> Result<Option<VerificationCode>, VerificationCodeRepositoryError>;

    /// Counts one submission in a single conditional write. `false` when the
    /// code is already used, expired at `now`, or out of attempts.
    async fn record_attempt(
        &self,
        code_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, VerificationCodeRepositoryError>;

    /// Marks the code used. `false` when another submission got there first.
    async fn consume(&self, code_id: i32) -> Result<bool, VerificationCodeRepositoryError>;
}
