mod add_step;
mod admin_list_user_tasks;
mod batch_delete_tasks;
mod batch_update_tasks;
mod create_task;
mod delete_step;
mod delete_task;
mod filter_tasks;
mod get_task;
mod list_tasks;
mod task_stats;
mod toggle_step;
mod toggle_task;
mod update_step;
mod update_task;

pub use add_step::*;
pub use admin_list_user_tasks::*;
pub use batch_delete_tasks::*;
pub use batch_update_tasks::*;
pub use create_task::*;
pub use delete_step::*;
pub use delete_task::*;
pub use filter_tasks::*;
pub use get_task::*;
pub use list_tasks::*;
pub use task_stats::*;
pub use toggle_step::*;
pub use toggle_task::*;
pub use update_step::*;
pub use update_task::*;

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::task::application::ports::incoming::use_cases::{
    BatchTasksError, StepUseCaseError, TaskUseCaseError,
};
use crate::shared::api::ApiResponse;

fn task_error_response(e: TaskUseCaseError, action: &str) -> HttpResponse {
    match e {
        TaskUseCaseError::Validation(msg) => ApiResponse::validation_error(&msg),
        TaskUseCaseError::TaskNotFound => ApiResponse::task_not_found(),
        TaskUseCaseError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to {action}");
            ApiResponse::internal_error()
        }
    }
}

fn step_error_response(e: StepUseCaseError, action: &str) -> HttpResponse {
    match e {
        StepUseCaseError::Validation(msg) => ApiResponse::validation_error(&msg),
        StepUseCaseError::TaskNotFound => ApiResponse::task_not_found(),
        StepUseCaseError::StepNotFound => ApiResponse::not_found("STEP_NOT_FOUND", "Step not found"),
        StepUseCaseError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to {action}");
            ApiResponse::internal_error()
        }
    }
}

fn batch_error_response(e: BatchTasksError, action: &str) -> HttpResponse {
    match e {
        BatchTasksError::Validation(msg) => ApiResponse::validation_error(&msg),
        BatchTasksError::NotOwned => ApiResponse::forbidden(
            "TASKS_NOT_OWNED",
            "One or more tasks do not exist or belong to another user",
        ),
        BatchTasksError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to {action}");
            ApiResponse::internal_error()
        }
    }
}
