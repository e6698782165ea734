use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::application::domain::entities::VerificationPurpose;
use crate::auth::application::use_cases::VerifyCodeError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::send_verification_code::default_purpose;

#[derive(Deserialize, ToSchema)]
pub struct VerifyEmailDto {
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "042917")]
    pub code: String,
    #[serde(default = "default_purpose")]
    pub purpose: VerificationPurpose,
}

/// Consume a verification code
///
/// A registration code marks every account under the email as verified.
#[utoipa::path(
    post,
    path = "/api/auth/verify-email",
    tag = "auth",
    request_body = VerifyEmailDto,
    responses(
        (status = 200, description = "Code accepted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Wrong, expired or exhausted code", body = ErrorResponse),
        (status = 404, description = "No active code", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/verify-email")]
pub async fn verify_email_handler(
    req: web::Json<VerifyEmailDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .auth
        .verify_code
        .execute(&dto.email, dto.purpose, &dto.code)
        .await
    {
        Ok(()) => ApiResponse::success(MessageResponse::new("Verification successful")),
        Err(VerifyCodeError::CodeNotFound) => {
            ApiResponse::not_found("CODE_NOT_FOUND", "No active verification code")
        }
        Err(VerifyCodeError::Expired) => {
            ApiResponse::bad_request("CODE_EXPIRED", "Verification code has expired")
        }
        Err(VerifyCodeError::AttemptsExceeded) => {
            ApiResponse::bad_request("TOO_MANY_ATTEMPTS", "Too many verification attempts")
        }
        Err(VerifyCodeError::InvalidCode) => {
            ApiResponse::bad_request("INVALID_CODE", "Verification code is incorrect")
        }
        Err(VerifyCodeError::RepositoryError(e)) => {
            error!(error = %e, "Verification failed");
            ApiResponse::internal_error()
        }
    }
}
