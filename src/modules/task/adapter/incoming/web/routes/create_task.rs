use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::{
    NewTask, Priority, StepDraft, Task, DEFAULT_CATEGORY,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use super::task_error_response;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    #[schema(example = "Write quarterly report")]
    #[serde(alias = "task")]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[schema(example = "work")]
    pub category: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reminder: bool,
    /// Minutes.
    pub estimated_time: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub steps: Vec<StepDraft>,
}

impl From<CreateTaskDto> for NewTask {
    fn from(dto: CreateTaskDto) -> Self {
        NewTask {
            title: dto.title,
            description: dto.description,
            priority: dto.priority,
            category: dto
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            due_date: dto.due_date,
            reminder: dto.reminder,
            estimated_time: dto.estimated_time,
            tags: dto.tags,
            steps: dto.steps,
        }
    }
}

/// Create a task
///
/// The task and its initial steps are written atomically.
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    security(("bearer_auth" = [])),
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = inline(SuccessResponse<Task>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/tasks")]
pub async fn create_task_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateTaskDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let new_task = NewTask::from(req.into_inner());

    match data.task.create.execute(user.user_id, new_task).await {
        Ok(task) => ApiResponse::created(task),
        Err(e) => task_error_response(e, "create task"),
    }
}
