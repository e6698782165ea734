use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::batch_error_response;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteDto {
    #[serde(alias = "todoIds")]
    pub task_ids: Vec<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResponse {
    pub deleted_ids: Vec<i32>,
}

/// Delete many tasks at once
///
/// Every id must belong to the caller; otherwise nothing is deleted.
#[utoipa::path(
    delete,
    path = "/api/v2/tasks/batch",
    tag = "tasks",
    security(("bearer_auth" = [])),
    request_body = BatchDeleteDto,
    responses(
        (status = 200, description = "Ids that were deleted", body = inline(SuccessResponse<BatchDeleteResponse>)),
        (status = 400, description = "No ids", body = ErrorResponse),
        (status = 403, description = "Some ids are missing or foreign", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v2/tasks/batch")]
pub async fn batch_delete_tasks_handler(
    user: AuthenticatedUser,
    req: web::Json<BatchDeleteDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .task
        .batch_delete
        .execute(user.user_id, req.into_inner().task_ids)
        .await
    {
        Ok(deleted_ids) => ApiResponse::success(BatchDeleteResponse { deleted_ids }),
        Err(e) => batch_error_response(e, "batch delete tasks"),
    }
}
