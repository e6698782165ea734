use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Step, StepDraft};
use crate::modules::task::application::ports::outgoing::{StepRepository, StepRepositoryError};

use super::sea_orm_entity::steps::Model as StepModel;
use super::task_mapping::model_to_step;

/// Every statement joins `tasks` so a step is only reachable through a task
/// owned by the caller.
#[derive(Clone, Debug)]
pub struct StepRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StepRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StepRepository for StepRepositoryPostgres {
    async fn add_step(
        &self,
        owner: UserId,
        task_id: i32,
        step: StepDraft,
    ) -> Result<Step, StepRepositoryError> {
        let inserted = StepModel::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO steps (task_id, content, completed)
            SELECT t.id, $3, $4 FROM tasks t
            WHERE t.id = $1 AND t.user_id = $2
            RETURNING id, task_id, content, completed
            "#,
            [
                task_id.into(),
                owner.value().into(),
                step.content.trim().to_string().into(),
                step.completed.into(),
            ],
        ))
        .one(&*self.db)
        .await
        .map_err(map_db_err)?
        .ok_or(StepRepositoryError::TaskNotFound)?;

        Ok(model_to_step(inserted))
    }

    async fn update_step(
        &self,
        owner: UserId,
        task_id: i32,
        step_id: i32,
        content: String,
    ) -> Result<Step, StepRepositoryError> {
        let updated = StepModel::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE steps s SET content = $4
            FROM tasks t
            WHERE s.id = $1 AND s.task_id = $2 AND t.id = s.task_id AND t.user_id = $3
            RETURNING s.id, s.task_id, s.content, s.completed
            "#,
            [
                step_id.into(),
                task_id.into(),
                owner.value().into(),
                content.trim().to_string().into(),
            ],
        ))
        .one(&*self.db)
        .await
        .map_err(map_db_err)?
        .ok_or(StepRepositoryError::StepNotFound)?;

        Ok(model_to_step(updated))
    }

    async fn toggle_step(&self, owner: UserId, step_id: i32) -> Result<Step, StepRepositoryError> {
        let toggled = StepModel::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE steps s SET completed = NOT s.completed
            FROM tasks t
            WHERE s.id = $1 AND t.id = s.task_id AND t.user_id = $2
            RETURNING s.id, s.task_id, s.content, s.completed
            "#,
            [step_id.into(), owner.value().into()],
        ))
        .one(&*self.db)
        .await
        .map_err(map_db_err)?
        .ok_or(StepRepositoryError::StepNotFound)?;

        Ok(model_to_step(toggled))
    }

    async fn delete_step(
        &self,
        owner: UserId,
        task_id: i32,
        step_id: i32,
    ) -> Result<(), StepRepositoryError> {
        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                DELETE FROM steps s USING tasks t
                WHERE s.id = $1 AND s.task_id = $2 AND t.id = s.task_id AND t.user_id = $3
                "#,
                [step_id.into(), task_id.into(), owner.value().into()],
            ))
            .await
            .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(StepRepositoryError::StepNotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> StepRepositoryError {
    StepRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::task_fixtures::step_model;
    use sea_orm::{MockDatabase, MockExecResult};

    fn draft(content: &str) -> StepDraft {
        StepDraft {
            content: content.to_string(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_add_step_to_owned_task() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![step_model(5, 10, "buy milk")]])
            .into_connection();

        let repo = StepRepositoryPostgres::new(Arc::new(db));
        let step = repo
            .add_step(UserId::from(1), 10, draft(" buy milk "))
            .await
            .unwrap();

        assert_eq!(step.id, 5);
        assert_eq!(step.task_id, 10);
        assert!(!step.completed);
    }

    #[tokio::test]
    async fn test_add_step_to_foreign_task() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<StepModel>::new()])
            .into_connection();

        let repo = StepRepositoryPostgres::new(Arc::new(db));
        let result = repo.add_step(UserId::from(2), 10, draft("x")).await;

        assert!(matches!(result, Err(StepRepositoryError::TaskNotFound)));
    }

    #[tokio::test]
    async fn test_update_step_mismatched_task() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<StepModel>::new()])
            .into_connection();

        let repo = StepRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_step(UserId::from(1), 11, 5, "new".to_string())
            .await;

        assert!(matches!(result, Err(StepRepositoryError::StepNotFound)));
    }

    #[tokio::test]
    async fn test_toggle_step_twice_restores_state() {
        let mut done = step_model(5, 10, "walk");
        done.completed = true;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![done]])
            .append_query_results(vec![vec![step_model(5, 10, "walk")]])
            .into_connection();

        let repo = StepRepositoryPostgres::new(Arc::new(db));
        let first = repo.toggle_step(UserId::from(1), 5).await.unwrap();
        let second = repo.toggle_step(UserId::from(1), 5).await.unwrap();

        assert!(first.completed);
        assert!(!second.completed);
    }

    #[tokio::test]
    async fn test_delete_step_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = StepRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete_step(UserId::from(1), 10, 5).await;

        assert!(matches!(result, Err(StepRepositoryError::StepNotFound)));
    }

    #[tokio::test]
    async fn test_database_error_propagates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = StepRepositoryPostgres::new(Arc::new(db));
        let result = repo.toggle_step(UserId::from(1), 5).await;

        assert!(matches!(result, Err(StepRepositoryError::DatabaseError(_))));
    }
}
