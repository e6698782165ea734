use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::{Expr, SimpleExpr},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Step, Task};
use crate::modules::task::application::domain::filter::{
    PageRequest, SortOrder, TaskFilter, TaskPage, TaskSortField,
};
use crate::modules::task::application::ports::outgoing::{TaskQuery, TaskQueryError};

use super::sea_orm_entity::tasks::{self, Column, Entity};
use super::task_mapping::{load_steps, model_to_task};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct TaskQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TaskQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attaches steps with a single read. A failed read is logged and the
    /// tasks come back with empty step lists.
    async fn with_steps(&self, models: Vec<tasks::Model>) -> Result<Vec<Task>, TaskQueryError> {
        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();

        let mut grouped = match load_steps(&*self.db, &ids).await {
            Ok(grouped) => grouped,
            Err(e) => {
                warn!(error = %e, tasks = ids.len(), "Step read failed, returning tasks without steps");
                Default::default()
            }
        };

        Ok(models
            .into_iter()
            .map(|model| {
                let steps = grouped.remove(&model.id).unwrap_or_default();
                model_to_task(model, steps)
            })
            .collect())
    }
}

#[async_trait]
impl TaskQuery for TaskQueryPostgres {
    async fn list_tasks(&self, owner: UserId) -> Result<Vec<Task>, TaskQueryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_steps(models).await
    }

    async fn get_by_id(&self, owner: UserId, task_id: i32) -> Result<Task, TaskQueryError> {
        let model = Entity::find_by_id(task_id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TaskQueryError::NotFound)?;

        let mut tasks = self.with_steps(vec![model]).await?;
        tasks.pop().ok_or(TaskQueryError::NotFound)
    }

    async fn get_steps_by_task_id(&self, task_id: i32) -> Result<Vec<Step>, TaskQueryError> {
        let mut grouped = load_steps(&*self.db, &[task_id])
            .await
            .map_err(map_db_err)?;

        Ok(grouped.remove(&task_id).unwrap_or_default())
    }

    async fn filter(
        &self,
        owner: UserId,
        filter: TaskFilter,
        page: PageRequest,
    ) -> Result<TaskPage, TaskQueryError> {
        let query = apply_sort(
            apply_filter(Entity::find(), owner, &filter),
            filter.sort_by,
            filter.sort_order,
        );

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.page_size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = self.with_steps(models).await?;

        Ok(TaskPage::new(items, total, page))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_filter(mut query: Select<Entity>, owner: UserId, filter: &TaskFilter) -> Select<Entity> {
    query = query.filter(Column::UserId.eq(owner.value()));

    if let Some(done) = filter.status.done() {
        query = query.filter(Column::Done.eq(done));
    }

    if let Some(priority) = filter.priority.priority() {
        query = query.filter(Column::Priority.eq(priority.as_str()));
    }

    if let Some(ref category) = filter.category {
        query = query.filter(Column::Category.eq(category.as_str()));
    }

    if let Some(ref search) = filter.search {
        let search_pattern = format!("%{}%", search.trim());
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(&search_pattern))
                .add(Expr::col(Column::Description).ilike(&search_pattern)),
        );
    }

    if let Some(from) = filter.due_date_from {
        query = query.filter(Column::DueDate.gte(from.fixed_offset()));
    }

    if let Some(to) = filter.due_date_to {
        query = query.filter(Column::DueDate.lte(to.fixed_offset()));
    }

    query
}

/// Ties break on id in the same direction, so flipping the order reverses
/// the page exactly.
fn apply_sort(query: Select<Entity>, sort_by: TaskSortField, sort_order: SortOrder) -> Select<Entity> {
    let order = match sort_order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };

    let query = match sort_by {
        TaskSortField::CreatedAt => query.order_by(Column::CreatedAt, order.clone()),
        TaskSortField::UpdatedAt => query.order_by(Column::UpdatedAt, order.clone()),
        TaskSortField::Alphabetical => query.order_by(Column::Title, order.clone()),
        TaskSortField::Priority => query.order_by(priority_rank(), order.clone()),
    };

    query.order_by(Column::Id, order)
}

/// high = 1, medium = 2, low = 3, anything else = 4.
fn priority_rank() -> SimpleExpr {
    Expr::case(Column::Priority.eq("high"), Expr::val(1))
        .case(Column::Priority.eq("medium"), Expr::val(2))
        .case(Column::Priority.eq("low"), Expr::val(3))
        .finally(Expr::val(4))
        .into()
}

fn map_db_err(e: DbErr) -> TaskQueryError {
    TaskQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
