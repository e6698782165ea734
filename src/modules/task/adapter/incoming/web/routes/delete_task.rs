use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::info;

use super::task_error_response;

/// Delete a task and its steps
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task missing or owned by another user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/tasks/{id}")]
pub async fn delete_task_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let task_id = path.into_inner();

    match data.task.delete.execute(user.user_id, task_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, task_id, "Task deleted via API");
            ApiResponse::no_content()
        }
        Err(e) => task_error_response(e, "delete task"),
    }
}
