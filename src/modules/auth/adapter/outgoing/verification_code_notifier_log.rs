use async_trait::async_trait;
use tracing::{debug, info};

use crate::modules::auth::application::domain::entities::VerificationPurpose;
use crate::modules::auth::application::ports::outgoing::verification_code_notifier::{
    NotifyError, VerificationCodeNotifier,
};

/// Records the dispatch in the log stream. No mail transport is wired up;
/// the code itself is only emitted at debug level.
#[derive(Clone, Default)]
pub struct LogVerificationCodeNotifier;

#[async_trait]
impl VerificationCodeNotifier for LogVerificationCodeNotifier {
    async fn send_code(
        &self,
        email: &str,
        code: &str,
        purpose: VerificationPurpose,
    ) -> Result<(), NotifyError> {
        info!(email = %email, purpose = purpose.as_str(), "Verification code issued");
        debug!(email = %email, code = %code, "Verification code value");
        Ok(())
    }
}
