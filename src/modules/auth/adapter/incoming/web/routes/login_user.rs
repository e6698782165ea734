use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::{AuthSession, LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "secret1")]
    pub password: String,
}

/// User login
///
/// Verifies username and password and returns a bearer token with its expiry.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<AuthSession>),
            example = json!({
                "success": true,
                "data": {
                    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expiresAt": "2025-01-02T00:00:00Z",
                    "user": {
                        "id": 1,
                        "username": "alice",
                        "email": "alice@example.com",
                        "isAdmin": false,
                        "emailVerified": true,
                        "createdAt": "2025-01-01T00:00:00Z"
                    }
                }
            })
        ),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(r) => r,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    info!(username = %request.username(), "Login attempt");

    match data.auth.login.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in");
            ApiResponse::success(session)
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
