use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column, Entity as UserEntity};
use super::user_repository_postgres::model_to_user;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(Column::Username.eq(username.trim()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(model_to_user))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users.into_iter().map(model_to_user).collect())
    }

    async fn admin_exists(&self) -> Result<bool, UserQueryError> {
        let admins = UserEntity::find()
            .filter(Column::IsAdmin.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(admins > 0)
    }
}
