use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use tq_api::app::{create_app, AppState};
use tq_api::config::Config;
use tq_core::services::auth::AuthService;
use tq_core::services::task::{TaskService, TaskServiceConfig};
use tq_core::services::token::{TokenService, TokenServiceConfig};
use tq_infra::cache::{RedisClient, RedisPageCache};
use tq_infra::database::{DatabasePool, PgTaskRepository, PgUserRepository};
use tq_shared::config::LogFormat;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("invalid configuration")?;
    init_tracing(&config);

    info!(environment = %config.environment, "Starting TaskQuery API server");
    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development secret");
    }

    let db_pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to PostgreSQL")?;
    let redis_client = RedisClient::new(config.cache.clone())
        .await
        .context("failed to connect to Redis")?;

    if !db_pool.health_check().await.context("PostgreSQL health check failed")? {
        anyhow::bail!("PostgreSQL health check returned an unexpected result");
    }
    match redis_client.health_check().await {
        Ok(true) => {}
        Ok(false) => tracing::warn!("Redis health check failed; task lists will be served from PostgreSQL"),
        Err(e) => tracing::warn!(error = %e, "Redis unreachable; task lists will be served from PostgreSQL"),
    }

    let token_service = Arc::new(TokenService::new(
        TokenServiceConfig::from_jwt_config(&config.auth.jwt)
            .context("invalid JWT configuration")?,
    ));
    let task_service = Arc::new(TaskService::new(
        Arc::new(PgTaskRepository::new(db_pool.get_pool().clone())),
        Arc::new(RedisPageCache::new(redis_client)),
        TaskServiceConfig::from(&config.cache),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(PgUserRepository::new(db_pool.get_pool().clone())),
        Arc::clone(&token_service),
    ));

    let app_state = web::Data::new(AppState::new(task_service, auth_service, token_service));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone()).wrap(TracingLogger::default())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    db_pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `LOG_LEVEL`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.logging.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
