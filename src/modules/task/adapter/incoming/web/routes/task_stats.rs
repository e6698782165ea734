use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::stats::TaskStats;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Completion statistics for the caller
///
/// Day boundaries are UTC.
#[utoipa::path(
    get,
    path = "/api/v2/tasks/stats",
    tag = "tasks",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Aggregated statistics", body = inline(SuccessResponse<TaskStats>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v2/tasks/stats")]
pub async fn task_stats_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.task.stats.execute(user.user_id).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to compute task stats");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::task::application::domain::stats::StatsSnapshot;
    use crate::modules::task::application::ports::incoming::use_cases::{
        GetTaskStatsError, GetTaskStatsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct StubStats(bool);

    #[async_trait]
    impl GetTaskStatsUseCase for StubStats {
        async fn execute(&self, _owner: UserId) -> Result<TaskStats, GetTaskStatsError> {
            if !self.0 {
                return Err(GetTaskStatsError::QueryFailed("timeout".to_string()));
            }
            let snapshot = StatsSnapshot {
                total: 4,
                completed: 2,
                pending: 2,
                ..Default::default()
            };
            Ok(TaskStats::from_snapshot(snapshot, Utc::now().date_naive()))
        }
    }

    async fn call(ok: bool) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_task_stats(StubStats(ok))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(task_stats_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v2/tasks/stats")
            .insert_header(("Authorization", bearer_for(1, false)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_stats_wire_shape() {
        let (status, body) = call(true).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["completionRate"], 50.0);
        assert_eq!(body["data"]["weekly"].as_array().map(Vec::len), Some(7));
        assert!(body["data"]["priority"]["high"].is_number());
        assert!(body["data"]["today"]["completed"].is_number());
        assert_eq!(body["data"]["streakDays"], 0);
    }

    #[actix_web::test]
    async fn test_stats_failure() {
        let (status, body) = call(false).await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
