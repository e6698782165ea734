use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};

use super::step_error_response;

/// Remove a step from a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}/steps/{step_id}",
    tag = "steps",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Parent task id"),
        ("step_id" = i32, Path, description = "Step id"),
    ),
    responses(
        (status = 204, description = "Step deleted"),
        (status = 404, description = "Step not found under this task", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/tasks/{id}/steps/{step_id}")]
pub async fn delete_step_handler(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (task_id, step_id) = path.into_inner();

    match data
        .task
        .delete_step
        .execute(user.user_id, task_id, step_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => step_error_response(e, "delete step"),
    }
}
