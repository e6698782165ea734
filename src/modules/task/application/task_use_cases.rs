use std::sync::Arc;

use crate::modules::task::application::ports::incoming::use_cases::{
    AddStepUseCase, BatchDeleteTasksUseCase, BatchUpdateTasksUseCase, CreateTaskUseCase,
    DeleteStepUseCase, DeleteTaskUseCase, FilterTasksUseCase, GetTaskStatsUseCase,
    GetTaskUseCase, ListTasksUseCase, ToggleStepUseCase, ToggleTaskUseCase, UpdateStepUseCase,
    UpdateTaskUseCase,
};

#[derive(Clone)]
pub struct TaskUseCases {
    pub list: Arc<dyn ListTasksUseCase + Send + Sync>,
    pub get: Arc<dyn GetTaskUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTaskUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTaskUseCase + Send + Sync>,
    pub toggle: Arc<dyn ToggleTaskUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTaskUseCase + Send + Sync>,
    pub add_step: Arc<dyn AddStepUseCase + Send + Sync>,
    pub update_step: Arc<dyn UpdateStepUseCase + Send + Sync>,
    pub toggle_step: Arc<dyn ToggleStepUseCase + Send + Sync>,
    pub delete_step: Arc<dyn DeleteStepUseCase + Send + Sync>,
    pub filter: Arc<dyn FilterTasksUseCase + Send + Sync>,
    pub batch_update: Arc<dyn BatchUpdateTasksUseCase + Send + Sync>,
    pub batch_delete: Arc<dyn BatchDeleteTasksUseCase + Send + Sync>,
    pub stats: Arc<dyn GetTaskStatsUseCase + Send + Sync>,
}
