use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, RegisterUserDto, SendVerificationCodeDto, VerifyEmailDto,
};
use crate::auth::application::domain::entities::VerificationPurpose;
use crate::auth::application::use_cases::{AuthSession, UserView};

// Tasks
use crate::task::adapter::incoming::web::routes::{
    BatchDeleteDto, BatchDeleteResponse, BatchUpdateDto, CreateTaskDto, UpdateStepDto,
    UpdateTaskDto,
};
use crate::task::application::domain::batch::TaskBatchPatch;
use crate::task::application::domain::entities::{Priority, Step, StepDraft, Task};
use crate::task::application::domain::filter::{
    PriorityFilter, SortOrder, StatusFilter, TaskPage, TaskSortField,
};
use crate::task::application::domain::stats::{
    CategoryCount, DailyCompletions, PriorityBreakdown, TaskStats, TodayStats,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "1.0.0",
        description = "Multi-user task management backend"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::send_verification_code_handler,
        crate::auth::adapter::incoming::web::routes::verify_email_handler,

        // Admin endpoints
        crate::auth::adapter::incoming::web::routes::list_users_handler,
        crate::task::adapter::incoming::web::routes::admin_list_user_tasks_handler,

        // Task endpoints
        crate::task::adapter::incoming::web::routes::list_tasks_handler,
        crate::task::adapter::incoming::web::routes::get_task_handler,
        crate::task::adapter::incoming::web::routes::create_task_handler,
        crate::task::adapter::incoming::web::routes::update_task_handler,
        crate::task::adapter::incoming::web::routes::toggle_task_handler,
        crate::task::adapter::incoming::web::routes::delete_task_handler,

        // Step endpoints
        crate::task::adapter::incoming::web::routes::add_step_handler,
        crate::task::adapter::incoming::web::routes::update_step_handler,
        crate::task::adapter::incoming::web::routes::toggle_step_handler,
        crate::task::adapter::incoming::web::routes::delete_step_handler,

        // v2 endpoints
        crate::task::adapter::incoming::web::routes::filter_tasks_handler,
        crate::task::adapter::incoming::web::routes::batch_update_tasks_handler,
        crate::task::adapter::incoming::web::routes::batch_delete_tasks_handler,
        crate::task::adapter::incoming::web::routes::task_stats_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,

            // Auth DTOs
            RegisterUserDto,
            LoginRequestDto,
            SendVerificationCodeDto,
            VerifyEmailDto,
            VerificationPurpose,
            AuthSession,
            UserView,

            // Task DTOs
            Task,
            Step,
            StepDraft,
            Priority,
            CreateTaskDto,
            UpdateTaskDto,
            UpdateStepDto,
            TaskPage,
            StatusFilter,
            PriorityFilter,
            TaskSortField,
            SortOrder,
            TaskBatchPatch,
            BatchUpdateDto,
            BatchDeleteDto,
            BatchDeleteResponse,
            TaskStats,
            PriorityBreakdown,
            TodayStats,
            CategoryCount,
            DailyCompletions
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and verification codes"),
        (name = "tasks", description = "Task management endpoints"),
        (name = "steps", description = "Step management endpoints"),
        (name = "admin", description = "Administrator endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
