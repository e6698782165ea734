use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::Step;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::step_error_response;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStepDto {
    #[schema(example = "Call the bank before noon")]
    pub content: String,
}

/// Replace a step's text
#[utoipa::path(
    put,
    path = "/api/tasks/{id}/steps/{step_id}",
    tag = "steps",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Parent task id"),
        ("step_id" = i32, Path, description = "Step id"),
    ),
    request_body = UpdateStepDto,
    responses(
        (status = 200, description = "Step updated", body = inline(SuccessResponse<Step>)),
        (status = 400, description = "Empty content", body = ErrorResponse),
        (status = 404, description = "Step not found under this task", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/tasks/{id}/steps/{step_id}")]
pub async fn update_step_handler(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    req: web::Json<UpdateStepDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (task_id, step_id) = path.into_inner();

    match data
        .task
        .update_step
        .execute(user.user_id, task_id, step_id, req.into_inner().content)
        .await
    {
        Ok(step) => ApiResponse::success(step),
        Err(e) => step_error_response(e, "update step"),
    }
}
