use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::filter::{
    PageRequest, PriorityFilter, SortOrder, StatusFilter, TaskFilter, TaskPage, TaskSortField,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct FilterTasksQuery {
    /// `all`, `completed` or `pending`.
    pub status: StatusFilter,
    /// `all`, `high`, `medium` or `low`.
    pub priority: PriorityFilter,
    /// `all` or blank disables the category filter.
    pub category: Option<String>,
    /// Case-insensitive match on title or description.
    pub search: Option<String>,
    pub due_date_from: Option<DateTime<Utc>>,
    pub due_date_to: Option<DateTime<Utc>>,
    /// `createdAt`, `updatedAt`, `priority` or `alphabetical`.
    pub sort_by: TaskSortField,
    /// `asc` or `desc`.
    pub sort_order: SortOrder,
    pub page: Option<u64>,
    #[serde(alias = "limit")]
    pub page_size: Option<u64>,
}

impl FilterTasksQuery {
    fn into_parts(self) -> (TaskFilter, PageRequest) {
        let filter = TaskFilter {
            status: self.status,
            priority: self.priority,
            category: TaskFilter::normalize_category(self.category),
            search: TaskFilter::normalize_search(self.search),
            due_date_from: self.due_date_from,
            due_date_to: self.due_date_to,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        };
        (filter, PageRequest::new(self.page, self.page_size))
    }
}

/// Filtered, sorted and paginated task list
#[utoipa::path(
    get,
    path = "/api/v2/tasks",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(FilterTasksQuery),
    responses(
        (status = 200, description = "One page of matching tasks", body = inline(SuccessResponse<TaskPage>)),
        (status = 400, description = "Unrecognised filter value", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v2/tasks")]
pub async fn filter_tasks_handler(
    user: AuthenticatedUser,
    query: web::Query<FilterTasksQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into_parts();

    match data.task.filter.execute(user.user_id, filter, page).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to filter tasks");
            ApiResponse::internal_error()
        }
    }
}
