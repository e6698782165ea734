use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider};

/// Public projection of a user; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub is_admin: bool,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_admin: user.is_admin,
            email_verified: user.email_verified,
            created_at: user.created_at,
        }
    }
}

/// Returned by both register and login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserView,
}

pub(crate) fn issue_session(
    tokens: &dyn TokenProvider,
    user: User,
) -> Result<AuthSession, TokenError> {
    let issued = tokens.generate_access_token(user.id, user.is_admin, user.email_verified)?;

    Ok(AuthSession {
        token: issued.token,
        expires_at: issued.expires_at,
        user: UserView::from(user),
    })
}
