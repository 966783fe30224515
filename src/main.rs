pub mod modules;
pub use modules::auth;
pub use modules::cv;

mod api;
mod config;
pub mod health;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::config::AppConfig;
use crate::cv::adapter::outgoing::CVRepoPostgres;
use crate::cv::application::use_cases::{
    delete_cv::{DeleteCVUseCase, IDeleteCVUseCase},
    fetch_or_create_cv::{FetchOrCreateCVUseCase, IFetchOrCreateCVUseCase},
    upsert_cv::{IUpsertCVUseCase, UpsertCVUseCase},
};
use crate::shared::api::custom_json_config;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub fetch_or_create_cv_use_case: Arc<dyn IFetchOrCreateCVUseCase + Send + Sync>,
    pub upsert_cv_use_case: Arc<dyn IUpsertCVUseCase + Send + Sync>,
    pub delete_cv_use_case: Arc<dyn IDeleteCVUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    let cv_repo = CVRepoPostgres::new(Arc::clone(&db_arc));
    let state = AppState {
        fetch_or_create_cv_use_case: Arc::new(FetchOrCreateCVUseCase::new(cv_repo.clone())),
        upsert_cv_use_case: Arc::new(UpsertCVUseCase::new(cv_repo.clone())),
        delete_cv_use_case: Arc::new(DeleteCVUseCase::new(cv_repo)),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // CV
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::upsert_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::delete_cv_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
