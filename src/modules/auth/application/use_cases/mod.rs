pub mod auth_session;
pub mod bootstrap_accounts;
pub mod list_users;
pub mod login_user;
pub mod register_user;
pub mod send_verification_code;
pub mod verify_code;

pub use auth_session::{AuthSession, UserView};
pub use bootstrap_accounts::{
    BootstrapAccountsUseCase, BootstrapConfig, BootstrapError, BootstrapReport,
    IBootstrapAccountsUseCase,
};
pub use list_users::{IListUsersUseCase, ListUsersError, ListUsersUseCase};
pub use login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginRequestError, LoginUserUseCase};
pub use register_user::{
    IRegisterUserUseCase, RegisterRequestError, RegisterUserError, RegisterUserRequest,
    RegisterUserUseCase,
};
pub use send_verification_code::{
    ISendVerificationCodeUseCase, SendVerificationCodeError, SendVerificationCodeUseCase,
};
pub use verify_code::{IVerifyCodeUseCase, VerifyCodeError, VerifyCodeUseCase};
