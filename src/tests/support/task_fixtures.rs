use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use mockall::mock;
use serde_json::json;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::adapter::outgoing::sea_orm_entity::{steps, tasks};
use crate::modules::task::application::domain::batch::TaskBatchPatch;
use crate::modules::task::application::domain::entities::{
    NewTask, Step, StepDraft, Task, UpdateTaskData,
};
use crate::modules::task::application::domain::filter::{PageRequest, TaskFilter, TaskPage};
use crate::modules::task::application::domain::stats::StatsSnapshot;
use crate::modules::task::application::ports::outgoing::{
    StepRepository, StepRepositoryError, TaskQuery, TaskQueryError, TaskRepository,
    TaskRepositoryError, TaskStatsQuery, TaskStatsQueryError,
};

pub fn sample_task(id: i32, owner: i32) -> Task {
    let created = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    Task {
        id,
        title: format!("Task {id}"),
        description: None,
        done: false,
        priority: "medium".to_string(),
        category: "personal".to_string(),
        due_date: None,
        reminder: false,
        estimated_time: None,
        tags: Vec::new(),
        user_id: UserId::from(owner),
        created_at: created,
        updated_at: created,
        completed_at: None,
        steps: Vec::new(),
    }
}

pub fn task_model(id: i32, owner: i32) -> tasks::Model {
    let created = Utc
        .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
        .unwrap()
        .fixed_offset();
    tasks::Model {
        id,
        title: format!("Task {id}"),
        description: None,
        done: false,
        priority: "medium".to_string(),
        category: "personal".to_string(),
        due_date: None,
        reminder: false,
        estimated_time: None,
        tags: json!([]),
        user_id: owner,
        created_at: created,
        updated_at: created,
        completed_at: None,
    }
}

pub fn step_model(id: i32, task_id: i32, content: &str) -> steps::Model {
    steps::Model {
        id,
        task_id,
        content: content.to_string(),
        completed: false,
    }
}

mock! {
    pub TaskRepo {}

    #[async_trait]
    impl TaskRepository for TaskRepo {
        async fn create_task(&self, owner: UserId, data: NewTask) -> Result<Task, TaskRepositoryError>;
        async fn update_task(&self, owner: UserId, data: UpdateTaskData) -> Result<Task, TaskRepositoryError>;
        async fn toggle_task(&self, owner: UserId, task_id: i32) -> Result<Task, TaskRepositoryError>;
        async fn delete_task(&self, owner: UserId, task_id: i32) -> Result<(), TaskRepositoryError>;
        async fn validate_ownership(&self, owner: UserId, task_ids: &[i32]) -> Result<bool, TaskRepositoryError>;
        async fn batch_update(&self, owner: UserId, task_ids: &[i32], patch: TaskBatchPatch) -> Result<Vec<Task>, TaskRepositoryError>;
        async fn batch_delete(&self, owner: UserId, task_ids: &[i32]) -> Result<u64, TaskRepositoryError>;
    }
}

mock! {
    pub StepRepo {}

    #[async_trait]
    impl StepRepository for StepRepo {
        async fn add_step(&self, owner: UserId, task_id: i32, step: StepDraft) -> Result<Step, StepRepositoryError>;
        async fn update_step(&self, owner: UserId, task_id: i32, step_id: i32, content: String) -> Result<Step, StepRepositoryError>;
        async fn toggle_step(&self, owner: UserId, step_id: i32) -> Result<Step, StepRepositoryError>;
        async fn delete_step(&self, owner: UserId, task_id: i32, step_id: i32) -> Result<(), StepRepositoryError>;
    }
}

mock! {
    pub TaskQuery {}

    #[async_trait]
    impl TaskQuery for TaskQuery {
        async fn list_tasks(&self, owner: UserId) -> Result<Vec<Task>, TaskQueryError>;
        async fn get_by_id(&self, owner: UserId, task_id: i32) -> Result<Task, TaskQueryError>;
        async fn get_steps_by_task_id(&self, task_id: i32) -> Result<Vec<Step>, TaskQueryError>;
        async fn filter(&self, owner: UserId, filter: TaskFilter, page: PageRequest) -> Result<TaskPage, TaskQueryError>;
    }
}

mock! {
    pub StatsQuery {}

    #[async_trait]
    impl TaskStatsQuery for StatsQuery {
        async fn snapshot(&self, owner: UserId, today: NaiveDate) -> Result<StatsSnapshot, TaskStatsQueryError>;
    }
}
