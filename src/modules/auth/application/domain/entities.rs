use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Integer primary key of `users`, threaded through every owner-scoped call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub email_verified: bool,
}

// ============================================================================
// Verification codes
// ============================================================================

pub const VERIFICATION_CODE_TTL_MINUTES: i64 = 5;
pub const VERIFICATION_MAX_ATTEMPTS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerificationPurpose {
    Registration,
    PasswordReset,
}

impl VerificationPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationPurpose::Registration => "registration",
            VerificationPurpose::PasswordReset => "password_reset",
        }
    }
}

impl FromStr for VerificationPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registration" => Ok(VerificationPurpose::Registration),
            "password_reset" => Ok(VerificationPurpose::PasswordReset),
            other => Err(format!("unknown verification purpose: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationCode {
    pub id: i32,
    pub email: String,
    pub code: String,
    pub purpose: VerificationPurpose,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub attempts: i32,
    pub max_attempts: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRejection {
    Expired,
    AttemptsExceeded,
}

impl VerificationCode {
    pub fn expiry_for(created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + Duration::minutes(VERIFICATION_CODE_TTL_MINUTES)
    }

    /// Expiry is checked before the attempt budget.
    pub fn check_consumable(&self, now: DateTime<Utc>) -> Result<(), CodeRejection> {
        if now > self.expires_at {
            return Err(CodeRejection::Expired);
        }
        if self.attempts >= self.max_attempts {
            return Err(CodeRejection::AttemptsExceeded);
        }
        Ok(())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.code == candidate.trim()
    }
}

/// Six ASCII digits, zero-padded.
pub fn generate_verification_code<R: RngCore>(rng: &mut R) -> String {
    format!("{:06}", rng.gen_range(0..1_000_000u32))
}
