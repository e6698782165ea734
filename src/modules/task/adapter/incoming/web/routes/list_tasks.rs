use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::Task;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

use super::task_error_response;

/// List the caller's tasks
///
/// Newest first, each task with its steps.
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tasks owned by the caller", body = inline(SuccessResponse<Vec<Task>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/tasks")]
pub async fn list_tasks_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.task.list.execute(user.user_id).await {
        Ok(tasks) => ApiResponse::success(tasks),
        Err(e) => task_error_response(e, "list tasks"),
    }
}
