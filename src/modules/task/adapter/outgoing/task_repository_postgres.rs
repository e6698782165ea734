use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, Set,
    Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::batch::{dedup_ids, TaskBatchPatch};
use crate::modules::task::application::domain::entities::{
    NewTask, Step, StepDraft, Task, UpdateTaskData,
};
use crate::modules::task::application::ports::outgoing::{TaskRepository, TaskRepositoryError};

use super::sea_orm_entity::steps::{
    self, ActiveModel as StepActiveModel, Entity as StepEntity,
};
use super::sea_orm_entity::tasks::{
    ActiveModel as TaskActiveModel, Column, Entity as TaskEntity, Model as TaskModel,
};
use super::task_mapping::{load_steps, model_to_step, model_to_task};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct TaskRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryPostgres {
    async fn create_task(&self, owner: UserId, data: NewTask) -> Result<Task, TaskRepositoryError> {
        let now = Utc::now().fixed_offset();
        let tags = to_json(&data.tags)?;

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = TaskActiveModel {
            id: NotSet,
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            done: Set(false),
            priority: Set(data.priority.as_str().to_string()),
            category: Set(data.category.trim().to_string()),
            due_date: Set(data.due_date.map(|d| d.fixed_offset())),
            reminder: Set(data.reminder),
            estimated_time: Set(data.estimated_time),
            tags: Set(tags),
            user_id: Set(owner.value()),
            created_at: Set(now),
            updated_at: Set(now),
            completed_at: Set(None),
        };

        let inserted = match model.insert(&txn).await {
            Ok(m) => m,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        let steps = match insert_steps(&txn, inserted.id, data.steps).await {
            Ok(steps) => steps,
            Err(e) => {
                warn!(user_id = %owner, error = %e, "Step insert failed, rolling back task");
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(model_to_task(inserted, steps))
    }

    async fn update_task(
        &self,
        owner: UserId,
        data: UpdateTaskData,
    ) -> Result<Task, TaskRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = match TaskEntity::find_by_id(data.id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&txn)
            .await
        {
            Ok(Some(model)) => model,
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(TaskRepositoryError::NotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        let mut model: TaskActiveModel = existing.into();
        if let Some(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let Some(description) = data.description {
            model.description = Set(Some(description));
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = match model.update(&txn).await {
            Ok(m) => m,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        let steps = match data.steps {
            Some(drafts) => replace_steps(&txn, updated.id, drafts).await,
            None => load_steps(&txn, &[updated.id])
                .await
                .map(|mut grouped| grouped.remove(&updated.id).unwrap_or_default()),
        };

        let steps = match steps {
            Ok(steps) => steps,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(model_to_task(updated, steps))
    }

    async fn toggle_task(&self, owner: UserId, task_id: i32) -> Result<Task, TaskRepositoryError> {
        // Right-hand sides see the pre-update row.
        let toggled = TaskModel::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE tasks
            SET done = NOT done,
                updated_at = NOW(),
                completed_at = CASE WHEN NOT done THEN NOW() ELSE completed_at END
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
            [task_id.into(), owner.value().into()],
        ))
        .one(&*self.db)
        .await
        .map_err(map_db_err)?
        .ok_or(TaskRepositoryError::NotFound)?;

        let steps = load_steps(&*self.db, &[task_id])
            .await
            .map_err(map_db_err)?
            .remove(&task_id)
            .unwrap_or_default();

        Ok(model_to_task(toggled, steps))
    }

    async fn delete_task(&self, owner: UserId, task_id: i32) -> Result<(), TaskRepositoryError> {
        let result = TaskEntity::delete_many()
            .filter(Column::Id.eq(task_id))
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TaskRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn validate_ownership(
        &self,
        owner: UserId,
        task_ids: &[i32],
    ) -> Result<bool, TaskRepositoryError> {
        let ids = dedup_ids(task_ids);
        if ids.is_empty() {
            return Ok(false);
        }

        let owned = TaskEntity::find()
            .filter(Column::Id.is_in(ids.clone()))
            .filter(Column::UserId.eq(owner.value()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(owned == ids.len() as u64)
    }

    async fn batch_update(
        &self,
        owner: UserId,
        task_ids: &[i32],
        patch: TaskBatchPatch,
    ) -> Result<Vec<Task>, TaskRepositoryError> {
        let now = Utc::now().fixed_offset();
        let marks_done = patch.marks_done();

        let mut update = TaskEntity::update_many().col_expr(Column::UpdatedAt, Expr::value(now));

        if let Some(done) = patch.done {
            update = update.col_expr(Column::Done, Expr::value(done));
        }
        if marks_done {
            update = update.col_expr(Column::CompletedAt, Expr::value(now));
        }
        if let Some(priority) = patch.priority {
            update = update.col_expr(Column::Priority, Expr::value(priority.as_str()));
        }
        if let Some(category) = patch.category {
            update = update.col_expr(Column::Category, Expr::value(category.trim().to_string()));
        }
        if let Some(reminder) = patch.reminder {
            update = update.col_expr(Column::Reminder, Expr::value(reminder));
        }
        if let Some(title) = patch.title {
            update = update.col_expr(Column::Title, Expr::value(title.trim().to_string()));
        }
        if let Some(description) = patch.description.into_update() {
            update = update.col_expr(Column::Description, Expr::value(description));
        }
        if let Some(due_date) = patch.due_date.into_update() {
            update = update.col_expr(
                Column::DueDate,
                Expr::value(due_date.map(|d| d.fixed_offset())),
            );
        }
        if let Some(estimate) = patch.estimated_time.into_update() {
            update = update.col_expr(Column::EstimatedTime, Expr::value(estimate));
        }

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut rows = match update
            .filter(Column::Id.is_in(task_ids.to_vec()))
            .filter(Column::UserId.eq(owner.value()))
            .exec_with_returning(&txn)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };
        rows.sort_by_key(|row| row.id);

        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut grouped = match load_steps(&txn, &ids).await {
            Ok(grouped) => grouped,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let steps = grouped.remove(&row.id).unwrap_or_default();
                model_to_task(row, steps)
            })
            .collect())
    }

    async fn batch_delete(
        &self,
        owner: UserId,
        task_ids: &[i32],
    ) -> Result<u64, TaskRepositoryError> {
        let result = TaskEntity::delete_many()
            .filter(Column::Id.is_in(task_ids.to_vec()))
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn insert_steps(
    txn: &DatabaseTransaction,
    task_id: i32,
    drafts: Vec<StepDraft>,
) -> Result<Vec<Step>, DbErr> {
    let mut steps = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let model = StepActiveModel {
            id: NotSet,
            task_id: Set(task_id),
            content: Set(draft.content.trim().to_string()),
            completed: Set(draft.completed),
        };
        steps.push(model_to_step(model.insert(txn).await?));
    }
    Ok(steps)
}

async fn replace_steps(
    txn: &DatabaseTransaction,
    task_id: i32,
    drafts: Vec<StepDraft>,
) -> Result<Vec<Step>, DbErr> {
    StepEntity::delete_many()
        .filter(steps::Column::TaskId.eq(task_id))
        .exec(txn)
        .await?;

    insert_steps(txn, task_id, drafts).await
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, TaskRepositoryError> {
    serde_json::to_value(data).map_err(|e| TaskRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> TaskRepositoryError {
    TaskRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
