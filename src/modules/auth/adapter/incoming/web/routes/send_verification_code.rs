use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::application::domain::entities::VerificationPurpose;
use crate::auth::application::use_cases::SendVerificationCodeError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SendVerificationCodeDto {
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[serde(default = "default_purpose")]
    pub purpose: VerificationPurpose,
}

pub(super) fn default_purpose() -> VerificationPurpose {
    VerificationPurpose::Registration
}

/// Issue a verification code
///
/// Replaces any earlier code for the same email and purpose. The code is
/// valid for five minutes and three attempts.
#[utoipa::path(
    post,
    path = "/api/auth/verification-codes",
    tag = "auth",
    request_body = SendVerificationCodeDto,
    responses(
        (status = 200, description = "Code issued", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Invalid email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/verification-codes")]
pub async fn send_verification_code_handler(
    req: web::Json<SendVerificationCodeDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .auth
        .send_verification_code
        .execute(&dto.email, dto.purpose)
        .await
    {
        Ok(()) => ApiResponse::success(MessageResponse::new("Verification code sent")),
        Err(SendVerificationCodeError::InvalidEmail) => {
            ApiResponse::validation_error("Invalid email format")
        }
        Err(e) => {
            error!(error = %e, "Failed to issue verification code");
            ApiResponse::internal_error()
        }
    }
}
