use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::batch::TaskBatchPatch;
use crate::modules::task::application::domain::entities::Task;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::batch_error_response;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateDto {
    #[serde(alias = "todoIds")]
    pub task_ids: Vec<i32>,
    pub updates: TaskBatchPatch,
}

/// Apply one patch to many tasks
///
/// Every id must belong to the caller; otherwise nothing is written.
#[utoipa::path(
    put,
    path = "/api/v2/tasks/batch",
    tag = "tasks",
    security(("bearer_auth" = [])),
    request_body = BatchUpdateDto,
    responses(
        (status = 200, description = "Updated tasks", body = inline(SuccessResponse<Vec<Task>>)),
        (status = 400, description = "No ids or no recognised fields", body = ErrorResponse),
        (status = 403, description = "Some ids are missing or foreign", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/v2/tasks/batch")]
pub async fn batch_update_tasks_handler(
    user: AuthenticatedUser,
    req: web::Json<BatchUpdateDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .task
        .batch_update
        .execute(user.user_id, dto.task_ids, dto.updates)
        .await
    {
        Ok(tasks) => ApiResponse::success(tasks),
        Err(e) => batch_error_response(e, "batch update tasks"),
    }
}
