pub mod domain;
pub mod ports;
pub mod service;
pub mod task_use_cases;

pub use task_use_cases::TaskUseCases;
