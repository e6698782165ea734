use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::use_cases::UserView;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// List all users (admin)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users, oldest first", body = inline(SuccessResponse<Vec<UserView>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/users")]
pub async fn list_users_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.list_users.execute().await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::{IListUsersUseCase, ListUsersError};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, sample_session, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct StubListUsers;

    #[async_trait]
    impl IListUsersUseCase for StubListUsers {
        async fn execute(&self) -> Result<Vec<UserView>, ListUsersError> {
            Ok(vec![sample_session(1, true).user, sample_session(2, false).user])
        }
    }

    #[actix_web::test]
    async fn test_admin_lists_users() {
        let app_state = TestAppStateBuilder::default()
            .with_list_users(StubListUsers)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(list_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(("Authorization", bearer_for(1, true)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_regular_user_forbidden() {
        let app_state = TestAppStateBuilder::default()
            .with_list_users(StubListUsers)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(list_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(("Authorization", bearer_for(2, false)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
    }
}
