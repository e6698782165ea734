use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::Task;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::info;

use super::task_error_response;

/// List another user's tasks (admin)
#[utoipa::path(
    get,
    path = "/api/admin/users/{user_id}/tasks",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "Owner whose tasks to list")),
    responses(
        (status = 200, description = "Tasks of the given user", body = inline(SuccessResponse<Vec<Task>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/users/{user_id}/tasks")]
pub async fn admin_list_user_tasks_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(path.into_inner());
    info!(admin_id = %admin.user_id, user_id = %owner, "Admin listing user tasks");

    match data.task.list.execute(owner).await {
        Ok(tasks) => ApiResponse::success(tasks),
        Err(e) => task_error_response(e, "list user tasks"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::task::application::ports::incoming::use_cases::{
        ListTasksUseCase, TaskUseCaseError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use crate::tests::support::task_fixtures::sample_task;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct StubList;

    #[async_trait]
    impl ListTasksUseCase for StubList {
        async fn execute(&self, owner: UserId) -> Result<Vec<Task>, TaskUseCaseError> {
            Ok(vec![sample_task(1, owner.value())])
        }
    }

    async fn call(is_admin: bool) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default().with_list_tasks(StubList).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(admin_list_user_tasks_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/users/9/tasks")
            .insert_header(("Authorization", bearer_for(1, is_admin)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_admin_sees_user_tasks() {
        let (status, body) = call(true).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"][0]["userId"], 9);
    }

    #[actix_web::test]
    async fn test_non_admin_forbidden() {
        let (status, body) = call(false).await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "ADMIN_REQUIRED");
    }
}
