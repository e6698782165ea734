pub mod auth;
pub mod task;
