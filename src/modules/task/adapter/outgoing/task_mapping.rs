use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Step, Task};

use super::sea_orm_entity::steps::{self, Entity as StepEntity};
use super::sea_orm_entity::tasks;

pub(crate) fn model_to_step(model: steps::Model) -> Step {
    Step {
        id: model.id,
        task_id: model.task_id,
        content: model.content,
        completed: model.completed,
    }
}

/// A `tags` column that is not a string array is logged and read as empty.
pub(crate) fn model_to_task(model: tasks::Model, steps: Vec<Step>) -> Task {
    let tags = match serde_json::from_value(model.tags) {
        Ok(tags) => tags,
        Err(e) => {
            warn!(task_id = model.id, error = %e, "Malformed tags, reading as empty");
            Vec::new()
        }
    };

    Task {
        id: model.id,
        title: model.title,
        description: model.description,
        done: model.done,
        priority: model.priority,
        category: model.category,
        due_date: model.due_date.map(Into::into),
        reminder: model.reminder,
        estimated_time: model.estimated_time,
        tags,
        user_id: UserId::from(model.user_id),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
        completed_at: model.completed_at.map(Into::into),
        steps,
    }
}

/// Steps of every listed task in one query, grouped by task id and
/// ordered by step id.
pub(crate) async fn load_steps<C>(
    conn: &C,
    task_ids: &[i32],
) -> Result<HashMap<i32, Vec<Step>>, DbErr>
where
    C: ConnectionTrait,
{
    let mut grouped: HashMap<i32, Vec<Step>> = HashMap::new();
    if task_ids.is_empty() {
        return Ok(grouped);
    }

    let rows = StepEntity::find()
        .filter(steps::Column::TaskId.is_in(task_ids.to_vec()))
        .order_by_asc(steps::Column::Id)
        .all(conn)
        .await?;

    for row in rows {
        grouped.entry(row.task_id).or_default().push(model_to_step(row));
    }

    Ok(grouped)
}
