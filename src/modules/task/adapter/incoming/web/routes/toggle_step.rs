use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::Step;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

use super::step_error_response;

/// Flip a step's completed flag
#[utoipa::path(
    post,
    path = "/api/steps/{step_id}/toggle",
    tag = "steps",
    security(("bearer_auth" = [])),
    params(("step_id" = i32, Path, description = "Step id")),
    responses(
        (status = 200, description = "Step toggled", body = inline(SuccessResponse<Step>)),
        (status = 404, description = "Step missing or owned by another user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/steps/{step_id}/toggle")]
pub async fn toggle_step_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .task
        .toggle_step
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(step) => ApiResponse::success(step),
        Err(e) => step_error_response(e, "toggle step"),
    }
}
