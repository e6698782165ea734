pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::task;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{
    LogVerificationCodeNotifier, UserQueryPostgres, UserRepositoryPostgres,
    VerificationCodeRepositoryPostgres,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    BootstrapAccountsUseCase, BootstrapConfig, IBootstrapAccountsUseCase, ListUsersUseCase,
    LoginUserUseCase, RegisterUserUseCase, SendVerificationCodeUseCase,
};
use crate::auth::application::use_cases::verify_code::VerifyCodeUseCase;
use crate::auth::application::AuthUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::task::adapter::outgoing::{
    StepRepositoryPostgres, TaskQueryPostgres, TaskRepositoryPostgres, TaskStatsQueryPostgres,
};
use crate::task::application::service::{
    AddStepService, BatchDeleteTasksService, BatchUpdateTasksService, CreateTaskService,
    DeleteStepService, DeleteTaskService, FilterTasksService, GetTaskService,
    GetTaskStatsService, ListTasksService, ToggleStepService, ToggleTaskService,
    UpdateStepService, UpdateTaskService,
};
use crate::task::application::TaskUseCases;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub task: TaskUseCases,
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    info!(environment = %rust_env, "Starting application...");

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let max_connections: u32 = env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);

    let server_url = format!("{host}:{port}");

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    if env_flag("RUN_MIGRATIONS", true) {
        Migrator::up(&conn, None).await.expect("Migration failed");
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let code_repo = VerificationCodeRepositoryPostgres::new(Arc::clone(&db_arc));
    let task_repo = TaskRepositoryPostgres::new(Arc::clone(&db_arc));
    let step_repo = StepRepositoryPostgres::new(Arc::clone(&db_arc));
    let task_query = TaskQueryPostgres::new(Arc::clone(&db_arc));
    let stats_query = TaskStatsQueryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());

    if env_flag("BOOTSTRAP_ACCOUNTS", true) {
        let bootstrap = BootstrapAccountsUseCase::new(
            user_repo.clone(),
            user_query.clone(),
            Arc::clone(&password_hasher),
        );
        match bootstrap.execute(&BootstrapConfig::from_env()).await {
            Ok(report) => info!(
                admin_created = report.admin_created,
                test_created = report.test_created,
                "Default accounts checked"
            ),
            Err(e) => error!(error = %e, "Default account bootstrap failed"),
        }
    }

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_repo.clone(),
            Arc::clone(&password_hasher),
            token_provider.clone(),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            Arc::clone(&password_hasher),
            token_provider.clone(),
        )),
        send_verification_code: Arc::new(SendVerificationCodeUseCase::new(
            code_repo.clone(),
            Arc::new(LogVerificationCodeNotifier),
        )),
        verify_code: Arc::new(VerifyCodeUseCase::new(code_repo, user_repo)),
        list_users: Arc::new(ListUsersUseCase::new(user_query)),
    };

    let task = TaskUseCases {
        list: Arc::new(ListTasksService::new(task_query.clone())),
        get: Arc::new(GetTaskService::new(task_query.clone())),
        create: Arc::new(CreateTaskService::new(task_repo.clone())),
        update: Arc::new(UpdateTaskService::new(task_repo.clone())),
        toggle: Arc::new(ToggleTaskService::new(task_repo.clone())),
        delete: Arc::new(DeleteTaskService::new(task_repo.clone())),
        add_step: Arc::new(AddStepService::new(step_repo.clone())),
        update_step: Arc::new(UpdateStepService::new(step_repo.clone())),
        toggle_step: Arc::new(ToggleStepService::new(step_repo.clone())),
        delete_step: Arc::new(DeleteStepService::new(step_repo)),
        filter: Arc::new(FilterTasksService::new(task_query)),
        batch_update: Arc::new(BatchUpdateTasksService::new(task_repo.clone())),
        batch_delete: Arc::new(BatchDeleteTasksService::new(task_repo)),
        stats: Arc::new(GetTaskStatsService::new(stats_query)),
    };

    let state = AppState { auth, task };
    let openapi = ApiDoc::openapi();

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::task::adapter::incoming::web::routes as task_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::send_verification_code_handler);
    cfg.service(auth_routes::verify_email_handler);
    // Admin
    cfg.service(auth_routes::list_users_handler);
    cfg.service(task_routes::admin_list_user_tasks_handler);
    // Filtered list, batch and stats; registered before `/api/tasks/{id}`
    cfg.service(task_routes::task_stats_handler);
    cfg.service(task_routes::filter_tasks_handler);
    cfg.service(task_routes::batch_update_tasks_handler);
    cfg.service(task_routes::batch_delete_tasks_handler);
    // Tasks
    cfg.service(task_routes::list_tasks_handler);
    cfg.service(task_routes::create_task_handler);
    cfg.service(task_routes::get_task_handler);
    cfg.service(task_routes::update_task_handler);
    cfg.service(task_routes::toggle_task_handler);
    cfg.service(task_routes::delete_task_handler);
    // Steps
    cfg.service(task_routes::add_step_handler);
    cfg.service(task_routes::update_step_handler);
    cfg.service(task_routes::toggle_step_handler);
    cfg.service(task_routes::delete_step_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
