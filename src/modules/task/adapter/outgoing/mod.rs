pub mod sea_orm_entity;
pub mod step_repository_postgres;
pub mod task_mapping;
pub mod task_query_postgres;
pub mod task_repository_postgres;
pub mod task_stats_query_postgres;

pub use step_repository_postgres::StepRepositoryPostgres;
pub use task_query_postgres::TaskQueryPostgres;
pub use task_repository_postgres::TaskRepositoryPostgres;
pub use task_stats_query_postgres::TaskStatsQueryPostgres;
