use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::{AuthSession, RegisterUserError, RegisterUserRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserDto {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "secret1")]
    pub password: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Register a new account
///
/// Creates an unverified, non-admin user and logs them in.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSession>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterUserRequest::new(dto.username, dto.password, dto.email) {
        Ok(r) => r,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    info!(username = %request.username(), "Registration attempt");

    match data.auth.register.execute(request).await {
        Ok(session) => ApiResponse::created(session),
        Err(RegisterUserError::UsernameTaken) => {
            warn!("Registration rejected: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already exists")
        }
        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::IRegisterUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::sample_session;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct StubRegister(Result<AuthSession, RegisterUserError>);

    #[async_trait]
    impl IRegisterUserUseCase for StubRegister {
        async fn execute(
            &self,
            _request: RegisterUserRequest,
        ) -> Result<AuthSession, RegisterUserError> {
            self.0.clone()
        }
    }

    async fn call(stub: StubRegister, body: serde_json::Value) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(stub)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(register_user_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "username": "alice",
            "password": "secret1",
            "email": "alice@example.com"
        })
    }

    #[actix_web::test]
    async fn test_register_created() {
        let (status, body) = call(StubRegister(Ok(sample_session(5, false))), valid_body()).await;

        assert_eq!(status, 201);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["id"], 5);
        assert!(body["data"]["expiresAt"].is_string());
        assert!(body["data"]["user"].get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn test_register_short_password_is_validation_error() {
        let (status, body) = call(
            StubRegister(Ok(sample_session(5, false))),
            serde_json::json!({"username": "alice", "password": "123", "email": "a@b.co"}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_duplicate_username_conflict() {
        let (status, body) =
            call(StubRegister(Err(RegisterUserError::UsernameTaken)), valid_body()).await;

        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "USERNAME_TAKEN");
    }
}
