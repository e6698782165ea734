use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::{StepDraft, Task, UpdateTaskData};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::task_error_response;

/// Omitted fields keep their stored value; `steps` replaces the whole set.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskDto {
    #[serde(alias = "task")]
    pub title: Option<String>,
    pub description: Option<String>,
    pub steps: Option<Vec<StepDraft>>,
}

/// Edit a task
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Task id")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = inline(SuccessResponse<Task>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Task missing or owned by another user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/tasks/{id}")]
pub async fn update_task_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<UpdateTaskDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let update = UpdateTaskData {
        id: path.into_inner(),
        title: dto.title,
        description: dto.description,
        steps: dto.steps,
    };

    match data.task.update.execute(user.user_id, update).await {
        Ok(task) => ApiResponse::success(task),
        Err(e) => task_error_response(e, "update task"),
    }
}
