pub mod step_repository;
pub mod task_query;
pub mod task_repository;
pub mod task_stats_query;

pub use step_repository::{StepRepository, StepRepositoryError};
pub use task_query::{TaskQuery, TaskQueryError};
pub use task_repository::{TaskRepository, TaskRepositoryError};
pub use task_stats_query::{TaskStatsQuery, TaskStatsQueryError};
