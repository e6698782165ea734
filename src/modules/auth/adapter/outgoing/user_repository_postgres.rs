use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::{NewUser, User, UserId};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_user(model: UserModel) -> User {
    User {
        id: UserId::from(model.id),
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        is_admin: model.is_admin,
        email_verified: model.email_verified,
        created_at: model.created_at.into(),
    }
}

fn map_insert_err(e: DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::UsernameTaken;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: NotSet,
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            email: Set(user.email),
            is_admin: Set(user.is_admin),
            email_verified: Set(user.email_verified),
            created_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_insert_err)?;

        Ok(model_to_user(inserted))
    }

    async fn mark_email_verified(&self, email: &str) -> Result<u64, UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(Column::EmailVerified, Expr::value(true))
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
