use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Step, StepDraft, TaskValidationError};
use crate::modules::task::application::ports::incoming::use_cases::{
    AddStepUseCase, DeleteStepUseCase, StepUseCaseError, ToggleStepUseCase, UpdateStepUseCase,
};
use crate::modules::task::application::ports::outgoing::StepRepository;

pub struct AddStepService<R>
where
    R: StepRepository,
{
    repo: R,
}

impl<R> AddStepService<R>
where
    R: StepRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AddStepUseCase for AddStepService<R>
where
    R: StepRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        task_id: i32,
        step: StepDraft,
    ) -> Result<Step, StepUseCaseError> {
        step.validate()?;

        self.repo
            .add_step(owner, task_id, step)
            .await
            .map_err(StepUseCaseError::from)
    }
}

pub struct UpdateStepService<R>
where
    R: StepRepository,
{
    repo: R,
}

impl<R> UpdateStepService<R>
where
    R: StepRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateStepUseCase for UpdateStepService<R>
where
    R: StepRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        task_id: i32,
        step_id: i32,
        content: String,
    ) -> Result<Step, StepUseCaseError> {
        if content.trim().is_empty() {
            return Err(TaskValidationError::EmptyStepContent.into());
        }

        self.repo
            .update_step(owner, task_id, step_id, content)
            .await
            .map_err(StepUseCaseError::from)
    }
}

pub struct ToggleStepService<R>
where
    R: StepRepository,
{
    repo: R,
}

impl<R> ToggleStepService<R>
where
    R: StepRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ToggleStepUseCase for ToggleStepService<R>
where
    R: StepRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, step_id: i32) -> Result<Step, StepUseCaseError> {
        self.repo
            .toggle_step(owner, step_id)
            .await
            .map_err(StepUseCaseError::from)
    }
}

pub struct DeleteStepService<R>
where
    R: StepRepository,
{
    repo: R,
}

impl<R> DeleteStepService<R>
where
    R: StepRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteStepUseCase for DeleteStepService<R>
where
    R: StepRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        task_id: i32,
        step_id: i32,
    ) -> Result<(), StepUseCaseError> {
        self.repo
            .delete_step(owner, task_id, step_id)
            .await
            .map_err(StepUseCaseError::from)
    }
}
