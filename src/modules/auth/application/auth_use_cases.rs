use std::sync::Arc;

use crate::auth::application::use_cases::{
    IListUsersUseCase, ILoginUserUseCase, IRegisterUserUseCase, ISendVerificationCodeUseCase,
    IVerifyCodeUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub send_verification_code: Arc<dyn ISendVerificationCodeUseCase + Send + Sync>,
    pub verify_code: Arc<dyn IVerifyCodeUseCase + Send + Sync>,
    pub list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
}
