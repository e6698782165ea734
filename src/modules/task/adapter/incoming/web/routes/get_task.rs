use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::Task;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

use super::task_error_response;

/// Get one task with its steps
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task found", body = inline(SuccessResponse<Task>)),
        (status = 404, description = "Task missing or owned by another user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/tasks/{id}")]
pub async fn get_task_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.task.get.execute(user.user_id, path.into_inner()).await {
        Ok(task) => ApiResponse::success(task),
        Err(e) => task_error_response(e, "fetch task"),
    }
}
