use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::{Step, StepDraft};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

use super::step_error_response;

/// Append a step to a task
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/steps",
    tag = "steps",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Parent task id")),
    request_body = StepDraft,
    responses(
        (status = 201, description = "Step created", body = inline(SuccessResponse<Step>)),
        (status = 400, description = "Empty content", body = ErrorResponse),
        (status = 404, description = "Task missing or owned by another user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/tasks/{id}/steps")]
pub async fn add_step_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<StepDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .task
        .add_step
        .execute(user.user_id, path.into_inner(), req.into_inner())
        .await
    {
        Ok(step) => ApiResponse::created(step),
        Err(e) => step_error_response(e, "add step"),
    }
}
