mod list_users;
mod login_user;
mod register_user;
mod send_verification_code;
mod verify_email;

pub use list_users::*;
pub use login_user::*;
pub use register_user::*;
pub use send_verification_code::*;
pub use verify_email::*;
