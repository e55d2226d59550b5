use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use user_api::app::{apply_middleware, apply_rate_limit, router};
use user_api::config::{AppConfig, ConfigError};
use user_api::constants::{ENV, SERVICE};
use user_api::shutdown::{shutdown_signal, spawn_drain_deadline};
use user_api::state::AppState;
use user_api::telemetry::init_tracing;

use user_lib::repository::UserRepository;
use user_lib::user_service::UserService;
use user_lib::util::connect_with_retry;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env = std::env::var(ENV).map_err(|_| ConfigError::Missing(ENV))?;
    init_tracing(&env)?;

    tracing::info!(service = SERVICE, env = %env, "tracing initialized");

    let config = AppConfig::from_env()?;
    let middleware_config = &config.middleware;
    tracing::info!(
        rate_limit_per_minute = middleware_config.rate_limit_per_minute,
        rate_limit_burst = middleware_config.rate_limit_burst,
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        cors_origins = ?middleware_config.cors_allowed_origins,
        "middleware configuration loaded"
    );

    let pool = connect_with_retry(&config.database_url, config.db_connect_retries).await?;

    let user_service = UserService::new(UserRepository::new(pool));
    let app_state = AppState::new(Arc::new(user_service), config.env.clone());

    let app = router(app_state);
    let app = apply_middleware(app, middleware_config);
    let app = apply_rate_limit(app, middleware_config)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let public_url = format!("http://127.0.0.1:{}", config.port);

    let listener = TcpListener::bind(&addr).await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!(
        "user-api is ready to accept requests at: {}",
        public_url
    );

    let shutdown_timeout = middleware_config.shutdown_timeout;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal(shutdown_timeout).await;
        spawn_drain_deadline(shutdown_timeout);
    })
    .await
    .map_err(|e| format!("Server error: {}", e))?;

    tracing::info!("user-api stopped");
    Ok(())
}
