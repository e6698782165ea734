use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    IListUsersUseCase, ILoginUserUseCase, IRegisterUserUseCase, ISendVerificationCodeUseCase,
    IVerifyCodeUseCase,
};
use crate::modules::task::application::ports::incoming::use_cases::{
    AddStepUseCase, BatchDeleteTasksUseCase, BatchUpdateTasksUseCase, CreateTaskUseCase,
    DeleteStepUseCase, DeleteTaskUseCase, FilterTasksUseCase, GetTaskStatsUseCase,
    GetTaskUseCase, ListTasksUseCase, ToggleStepUseCase, ToggleTaskUseCase, UpdateStepUseCase,
    UpdateTaskUseCase,
};
use crate::modules::task::application::TaskUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Starts from stubs for every use case; each `with_*` swaps in one double.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    task: TaskUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUser),
                login: Arc::new(StubLoginUser),
                send_verification_code: Arc::new(StubSendVerificationCode),
                verify_code: Arc::new(StubVerifyCode),
                list_users: Arc::new(StubListUsersUseCase),
            },
            task: TaskUseCases {
                list: Arc::new(StubListTasks),
                get: Arc::new(StubGetTask),
                create: Arc::new(StubCreateTask),
                update: Arc::new(StubUpdateTask),
                toggle: Arc::new(StubToggleTask),
                delete: Arc::new(StubDeleteTask),
                add_step: Arc::new(StubAddStep),
                update_step: Arc::new(StubUpdateStep),
                toggle_step: Arc::new(StubToggleStep),
                delete_step: Arc::new(StubDeleteStep),
                filter: Arc::new(StubFilterTasks),
                batch_update: Arc::new(StubBatchUpdate),
                batch_delete: Arc::new(StubBatchDelete),
                stats: Arc::new(StubTaskStats),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ---- auth ----

    pub fn with_register_user<T>(mut self, uc: T) -> Self
    where
        T: IRegisterUserUseCase + Send + Sync + 'static,
    {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user<T>(mut self, uc: T) -> Self
    where
        T: ILoginUserUseCase + Send + Sync + 'static,
    {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_send_verification_code<T>(mut self, uc: T) -> Self
    where
        T: ISendVerificationCodeUseCase + Send + Sync + 'static,
    {
        self.auth.send_verification_code = Arc::new(uc);
        self
    }

    pub fn with_verify_code<T>(mut self, uc: T) -> Self
    where
        T: IVerifyCodeUseCase + Send + Sync + 'static,
    {
        self.auth.verify_code = Arc::new(uc);
        self
    }

    pub fn with_list_users<T>(mut self, uc: T) -> Self
    where
        T: IListUsersUseCase + Send + Sync + 'static,
    {
        self.auth.list_users = Arc::new(uc);
        self
    }

    // ---- tasks ----

    pub fn with_list_tasks<T>(mut self, uc: T) -> Self
    where
        T: ListTasksUseCase + Send + Sync + 'static,
    {
        self.task.list = Arc::new(uc);
        self
    }

    pub fn with_get_task<T>(mut self, uc: T) -> Self
    where
        T: GetTaskUseCase + Send + Sync + 'static,
    {
        self.task.get = Arc::new(uc);
        self
    }

    pub fn with_create_task<T>(mut self, uc: T) -> Self
    where
        T: CreateTaskUseCase + Send + Sync + 'static,
    {
        self.task.create = Arc::new(uc);
        self
    }

    pub fn with_update_task<T>(mut self, uc: T) -> Self
    where
        T: UpdateTaskUseCase + Send + Sync + 'static,
    {
        self.task.update = Arc::new(uc);
        self
    }

    pub fn with_toggle_task<T>(mut self, uc: T) -> Self
    where
        T: ToggleTaskUseCase + Send + Sync + 'static,
    {
        self.task.toggle = Arc::new(uc);
        self
    }

    pub fn with_delete_task<T>(mut self, uc: T) -> Self
    where
        T: DeleteTaskUseCase + Send + Sync + 'static,
    {
        self.task.delete = Arc::new(uc);
        self
    }

    pub fn with_add_step<T>(mut self, uc: T) -> Self
    where
        T: AddStepUseCase + Send + Sync + 'static,
    {
        self.task.add_step = Arc::new(uc);
        self
    }

    pub fn with_update_step<T>(mut self, uc: T) -> Self
    where
        T: UpdateStepUseCase + Send + Sync + 'static,
    {
        self.task.update_step = Arc::new(uc);
        self
    }

    pub fn with_toggle_step<T>(mut self, uc: T) -> Self
    where
        T: ToggleStepUseCase + Send + Sync + 'static,
    {
        self.task.toggle_step = Arc::new(uc);
        self
    }

    pub fn with_delete_step<T>(mut self, uc: T) -> Self
    where
        T: DeleteStepUseCase + Send + Sync + 'static,
    {
        self.task.delete_step = Arc::new(uc);
        self
    }

    pub fn with_filter_tasks<T>(mut self, uc: T) -> Self
    where
        T: FilterTasksUseCase + Send + Sync + 'static,
    {
        self.task.filter = Arc::new(uc);
        self
    }

    pub fn with_batch_update<T>(mut self, uc: T) -> Self
    where
        T: BatchUpdateTasksUseCase + Send + Sync + 'static,
    {
        self.task.batch_update = Arc::new(uc);
        self
    }

    pub fn with_batch_delete<T>(mut self, uc: T) -> Self
    where
        T: BatchDeleteTasksUseCase + Send + Sync + 'static,
    {
        self.task.batch_delete = Arc::new(uc);
        self
    }

    pub fn with_task_stats<T>(mut self, uc: T) -> Self
    where
        T: GetTaskStatsUseCase + Send + Sync + 'static,
    {
        self.task.stats = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            task: self.task,
        })
    }
}
