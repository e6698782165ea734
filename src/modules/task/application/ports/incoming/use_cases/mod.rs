mod batch_tasks;
mod filter_tasks;
mod manage_steps;
mod manage_tasks;
mod task_stats;

pub use batch_tasks::{BatchDeleteTasksUseCase, BatchTasksError, BatchUpdateTasksUseCase};
pub use filter_tasks::{FilterTasksError, FilterTasksUseCase};
pub use manage_steps::{
    AddStepUseCase, DeleteStepUseCase, StepUseCaseError, ToggleStepUseCase, UpdateStepUseCase,
};
pub use manage_tasks::{
    CreateTaskUseCase, DeleteTaskUseCase, GetTaskUseCase, ListTasksUseCase, TaskUseCaseError,
    ToggleTaskUseCase, UpdateTaskUseCase,
};
pub use task_stats::{GetTaskStatsError, GetTaskStatsUseCase};
