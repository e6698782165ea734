use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::{
    VerificationCode, VerificationPurpose, VERIFICATION_MAX_ATTEMPTS,
};
use crate::modules::auth::application::ports::outgoing::verification_code_repository::{
    VerificationCodeRepository, VerificationCodeRepositoryError,
};

use super::sea_orm_entity::verification_codes::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct VerificationCodeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VerificationCodeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VerificationCodeRepository for VerificationCodeRepositoryPostgres {
    async fn replace_code(
        &self,
        email: &str,
        purpose: VerificationPurpose,
        code: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<VerificationCode, VerificationCodeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Err(e) = Entity::delete_many()
            .filter(Column::Email.eq(email))
            .filter(Column::Purpose.eq(purpose.as_str()))
            .exec(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(map_db_err(e));
        }

        let model = ActiveModel {
            id: NotSet,
            email: Set(email.to_string()),
            code: Set(code.to_string()),
            purpose: Set(purpose.as_str().to_string()),
            created_at: Set(created_at.fixed_offset()),
            expires_at: Set(expires_at.fixed_offset()),
            used: Set(false),
            attempts: Set(0),
            max_attempts: Set(VERIFICATION_MAX_ATTEMPTS),
        };

        let inserted = match model.insert(&txn).await {
            Ok(m) => m,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        txn.commit().await.map_err(map_db_err)?;

        model_to_code(inserted)
    }

    async fn find_active(
        &self,
        email: &str,
        purpose: VerificationPurpose,
    ) -> Result<Option<VerificationCode>, VerificationCodeRepositoryError> {
        let found = Entity::find()
            .filter(Column::Email.eq(email))
            .filter(Column::Purpose.eq(purpose.as_str()))
            .filter(Column::Used.eq(false))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found.map(model_to_code).transpose()
    }

    async fn record_attempt(
        &self,
        code_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, VerificationCodeRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Attempts, Expr::col(Column::Attempts).add(1))
            .filter(Column::Id.eq(code_id))
            .filter(Column::Used.eq(false))
            .filter(Column::ExpiresAt.gte(now.fixed_offset()))
            .filter(Expr::col(Column::Attempts).lt(Expr::col(Column::MaxAttempts)))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected == 1)
    }

    async fn consume(&self, code_id: i32) -> Result<bool, VerificationCodeRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Used, Expr::value(true))
            .filter(Column::Id.eq(code_id))
            .filter(Column::Used.eq(false))
            .filter(Expr::col(Column::Attempts).lte(Expr::col(Column::MaxAttempts)))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected == 1)
    }
}

fn model_to_code(model: Model) -> Result<VerificationCode, VerificationCodeRepositoryError> {
    let purpose = model
        .purpose
        .parse::<VerificationPurpose>()
        .map_err(VerificationCodeRepositoryError::DatabaseError)?;

    Ok(VerificationCode {
        id: model.id,
        email: model.email,
        code: model.code,
        purpose,
        created_at: model.created_at.into(),
        expires_at: model.expires_at.into(),
        used: model.used,
        attempts: model.attempts,
        max_attempts: model.max_attempts,
    })
}

fn map_db_err(e: DbErr) -> VerificationCodeRepositoryError {
    VerificationCodeRepositoryError::DatabaseError(e.to_string())
}
