mod batch_services;
mod filter_tasks_service;
mod step_services;
mod task_services;
mod task_stats_service;

pub use batch_services::{BatchDeleteTasksService, BatchUpdateTasksService};
pub use filter_tasks_service::FilterTasksService;
pub use step_services::{AddStepService, DeleteStepService, ToggleStepService, UpdateStepService};
pub use task_services::{
    CreateTaskService, DeleteTaskService, GetTaskService, ListTasksService, ToggleTaskService,
    UpdateTaskService,
};
pub use task_stats_service::GetTaskStatsService;
