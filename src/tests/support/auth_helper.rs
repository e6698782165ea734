use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{
    UserId, VerificationCode, VerificationPurpose, VERIFICATION_MAX_ATTEMPTS,
};
use crate::auth::application::ports::outgoing::{
    HashError, NotifyError, PasswordHasher, TokenProvider, VerificationCodeNotifier,
    VerificationCodeRepository, VerificationCodeRepositoryError,
};
use crate::auth::application::use_cases::{AuthSession, UserView};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "todo-backend-test".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// `Authorization` header value carrying a fresh access token.
pub fn bearer_for(user_id: i32, is_admin: bool) -> String {
    let issued = test_token_provider()
        .generate_access_token(UserId::from(user_id), is_admin, true)
        .expect("test token");
    format!("Bearer {}", issued.token)
}

pub fn sample_session(id: i32, is_admin: bool) -> AuthSession {
    let now = Utc::now();
    AuthSession {
        token: format!("token-{id}"),
        expires_at: now + chrono::Duration::hours(1),
        user: UserView {
            id: UserId::from(id),
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            is_admin,
            email_verified: is_admin,
            created_at: now,
        },
    }
}

/// Stores the password with a fixed prefix; keeps argon2 out of unit tests.
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("plain:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("plain:{password}"))
    }
}

// ============================================================================
// Verification code doubles
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryCodeRepository {
    codes: Arc<Mutex<Vec<VerificationCode>>>,
}

impl InMemoryCodeRepository {
    pub fn all(&self) -> Vec<VerificationCode> {
        self.codes.lock().unwrap().clone()
    }

    /// Applies `f` under the lock; `f` decides whether the write happens.
    fn update_if<F>(&self, code_id: i32, f: F) -> bool
    where
        F: FnOnce(&mut VerificationCode) -> bool,
    {
        let mut codes = self.codes.lock().unwrap();
        codes.iter_mut().find(|c| c.id == code_id).is_some_and(f)
    }
}

#[async_trait]
impl VerificationCodeRepository for InMemoryCodeRepository {
    async fn replace_code(
        &self,
        email: &str,
        purpose: VerificationPurpose,
        code: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<VerificationCode, VerificationCodeRepositoryError> {
        let mut codes = self.codes.lock().unwrap();
        codes.retain(|c| !(c.email == email && c.purpose == purpose));

        let next_id = codes.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let stored = VerificationCode {
            id: next_id,
            email: email.to_string(),
            code: code.to_string(),
            purpose,
            created_at,
            expires_at,
            used: false,
            attempts: 0,
            max_attempts: VERIFICATION_MAX_ATTEMPTS,
        };
        codes.push(stored.clone());
        Ok(stored)
    }

    async fn find_active(
        &self,
        email: &str,
        purpose: VerificationPurpose,
    ) -> Result<Option<VerificationCode>, VerificationCodeRepositoryError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.email == email && c.purpose == purpose && !c.used)
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn record_attempt(
        &self,
        code_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, VerificationCodeRepositoryError> {
        Ok(self.update_if(code_id, |c| {
            let open = !c.used && c.expires_at >= now && c.attempts < c.max_attempts;
            if open {
                c.attempts += 1;
            }
            open
        }))
    }

    async fn consume(&self, code_id: i32) -> Result<bool, VerificationCodeRepositoryError> {
        Ok(self.update_if(code_id, |c| {
            let open = !c.used && c.attempts <= c.max_attempts;
            if open {
                c.used = true;
            }
            open
        }))
    }
}

/// Captures `(email, code)` pairs instead of delivering them.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerificationCodeNotifier for RecordingNotifier {
    async fn send_code(
        &self,
        email: &str,
        code: &str,
        _purpose: VerificationPurpose,
    ) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        Ok(())
    }
}
