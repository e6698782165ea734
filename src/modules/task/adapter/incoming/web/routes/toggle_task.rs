use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::Task;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

use super::task_error_response;

/// Flip a task between done and not done
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/toggle",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task toggled", body = inline(SuccessResponse<Task>)),
        (status = 404, description = "Task missing or owned by another user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/tasks/{id}/toggle")]
pub async fn toggle_task_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.task.toggle.execute(user.user_id, path.into_inner()).await {
        Ok(task) => ApiResponse::success(task),
        Err(e) => task_error_response(e, "toggle task"),
    }
}
