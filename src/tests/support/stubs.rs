//! Default use case doubles for `TestAppStateBuilder`. Each one answers
//! with a repository error.

use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, VerificationPurpose};
use crate::auth::application::use_cases::{
    AuthSession, IListUsersUseCase, ILoginUserUseCase, IRegisterUserUseCase,
    ISendVerificationCodeUseCase, IVerifyCodeUseCase, ListUsersError, LoginError, LoginRequest,
    RegisterUserError, RegisterUserRequest, SendVerificationCodeError, UserView, VerifyCodeError,
};
use crate::modules::task::application::domain::batch::TaskBatchPatch;
use crate::modules::task::application::domain::entities::{
    NewTask, Step, StepDraft, Task, UpdateTaskData,
};
use crate::modules::task::application::domain::filter::{PageRequest, TaskFilter, TaskPage};
use crate::modules::task::application::domain::stats::TaskStats;
use crate::modules::task::application::ports::incoming::use_cases::{
    AddStepUseCase, BatchDeleteTasksUseCase, BatchTasksError, BatchUpdateTasksUseCase,
    CreateTaskUseCase, DeleteStepUseCase, DeleteTaskUseCase, FilterTasksError,
    FilterTasksUseCase, GetTaskStatsError, GetTaskStatsUseCase, GetTaskUseCase,
    ListTasksUseCase, StepUseCaseError, TaskUseCaseError, ToggleStepUseCase, ToggleTaskUseCase,
    UpdateStepUseCase, UpdateTaskUseCase,
};

const UNSTUBBED: &str = "not stubbed";

// ============================================================================
// Auth
// ============================================================================

pub struct StubRegisterUser;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUser {
    async fn execute(&self, _: RegisterUserRequest) -> Result<AuthSession, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(UNSTUBBED.into()))
    }
}

pub struct StubLoginUser;

#[async_trait]
impl ILoginUserUseCase for StubLoginUser {
    async fn execute(&self, _: LoginRequest) -> Result<AuthSession, LoginError> {
        Err(LoginError::QueryError(UNSTUBBED.into()))
    }
}

pub struct StubSendVerificationCode;

#[async_trait]
impl ISendVerificationCodeUseCase for StubSendVerificationCode {
    async fn execute(
        &self,
        _: &str,
        _: VerificationPurpose,
    ) -> Result<(), SendVerificationCodeError> {
        Err(SendVerificationCodeError::RepositoryError(UNSTUBBED.into()))
    }
}

pub struct StubVerifyCode;

#[async_trait]
impl IVerifyCodeUseCase for StubVerifyCode {
    async fn execute(&self, _: &str, _: VerificationPurpose, _: &str) -> Result<(), VerifyCodeError> {
        Err(VerifyCodeError::RepositoryError(UNSTUBBED.into()))
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self) -> Result<Vec<UserView>, ListUsersError> {
        Err(ListUsersError::QueryError(UNSTUBBED.into()))
    }
}

// ============================================================================
// Tasks
// ============================================================================

fn task_err() -> TaskUseCaseError {
    TaskUseCaseError::RepositoryError(UNSTUBBED.into())
}

fn step_err() -> StepUseCaseError {
    StepUseCaseError::RepositoryError(UNSTUBBED.into())
}

pub struct StubListTasks;

#[async_trait]
impl ListTasksUseCase for StubListTasks {
    async fn execute(&self, _: UserId) -> Result<Vec<Task>, TaskUseCaseError> {
        Err(task_err())
    }
}

pub struct StubGetTask;

#[async_trait]
impl GetTaskUseCase for StubGetTask {
    async fn execute(&self, _: UserId, _: i32) -> Result<Task, TaskUseCaseError> {
        Err(task_err())
    }
}

pub struct StubCreateTask;

#[async_trait]
impl CreateTaskUseCase for StubCreateTask {
    async fn execute(&self, _: UserId, _: NewTask) -> Result<Task, TaskUseCaseError> {
        Err(task_err())
    }
}

pub struct StubUpdateTask;

#[async_trait]
impl UpdateTaskUseCase for StubUpdateTask {
    async fn execute(&self, _: UserId, _: UpdateTaskData) -> Result<Task, TaskUseCaseError> {
        Err(task_err())
    }
}

pub struct StubToggleTask;

#[async_trait]
impl ToggleTaskUseCase for StubToggleTask {
    async fn execute(&self, _: UserId, _: i32) -> Result<Task, TaskUseCaseError> {
        Err(task_err())
    }
}

pub struct StubDeleteTask;

#[async_trait]
impl DeleteTaskUseCase for StubDeleteTask {
    async fn execute(&self, _: UserId, _: i32) -> Result<(), TaskUseCaseError> {
        Err(task_err())
    }
}

pub struct StubAddStep;

#[async_trait]
impl AddStepUseCase for StubAddStep {
    async fn execute(&self, _: UserId, _: i32, _: StepDraft) -> Result<Step, StepUseCaseError> {
        Err(step_err())
    }
}

pub struct StubUpdateStep;

#[async_trait]
impl UpdateStepUseCase for StubUpdateStep {
    async fn execute(
        &self,
        _: UserId,
        _: i32,
        _: i32,
        _: String,
    ) -> Result<Step, StepUseCaseError> {
        Err(step_err())
    }
}

pub struct StubToggleStep;

#[async_trait]
impl ToggleStepUseCase for StubToggleStep {
    async fn execute(&self, _: UserId, _: i32) -> Result<Step, StepUseCaseError> {
        Err(step_err())
    }
}

pub struct StubDeleteStep;

#[async_trait]
impl DeleteStepUseCase for StubDeleteStep {
    async fn execute(&self, _: UserId, _: i32, _: i32) -> Result<(), StepUseCaseError> {
        Err(step_err())
    }
}

pub struct StubFilterTasks;

#[async_trait]
impl FilterTasksUseCase for StubFilterTasks {
    async fn execute(
        &self,
        _: UserId,
        _: TaskFilter,
        _: PageRequest,
    ) -> Result<TaskPage, FilterTasksError> {
        Err(FilterTasksError::QueryFailed(UNSTUBBED.into()))
    }
}

pub struct StubBatchUpdate;

#[async_trait]
impl BatchUpdateTasksUseCase for StubBatchUpdate {
    async fn execute(
        &self,
        _: UserId,
        _: Vec<i32>,
        _: TaskBatchPatch,
    ) -> Result<Vec<Task>, BatchTasksError> {
        Err(BatchTasksError::RepositoryError(UNSTUBBED.into()))
    }
}

pub struct StubBatchDelete;

#[async_trait]
impl BatchDeleteTasksUseCase for StubBatchDelete {
    async fn execute(&self, _: UserId, _: Vec<i32>) -> Result<Vec<i32>, BatchTasksError> {
        Err(BatchTasksError::RepositoryError(UNSTUBBED.into()))
    }
}

pub struct StubTaskStats;

#[async_trait]
impl GetTaskStatsUseCase for StubTaskStats {
    async fn execute(&self, _: UserId) -> Result<TaskStats, GetTaskStatsError> {
        Err(GetTaskStatsError::QueryFailed(UNSTUBBED.into()))
    }
}
