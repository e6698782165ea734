// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    /// All accounts, oldest first.
    async fn list_users(&self) -> Result<Vec<User>, UserQueryError>;

    async fn admin_exists(&self) -> Result<bool, UserQueryError>;
}
