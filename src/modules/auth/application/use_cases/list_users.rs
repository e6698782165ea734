use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserQuery;

use super::auth_session::UserView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserView>, ListUsersError>;
}

pub struct ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<UserView>, ListUsersError> {
        let users = self
            .query
            .list_users()
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))?;

        Ok(users.into_iter().map(UserView::from).collect())
    }
}
