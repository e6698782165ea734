pub mod password_hasher;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;
pub mod verification_code_notifier;
pub mod verification_code_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{IssuedToken, TokenClaims, TokenError, TokenProvider};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserRepository, UserRepositoryError};
pub use verification_code_notifier::{NotifyError, VerificationCodeNotifier};
pub use verification_code_repository::{
    VerificationCodeRepository, VerificationCodeRepositoryError,
};
