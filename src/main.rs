use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use digest_profiles_backend::controllers::profile::ProfileController;
use digest_profiles_backend::domain::profile::ProfileService;
use digest_profiles_backend::infrastructure::config::{Config, LogFormat};
use digest_profiles_backend::infrastructure::db::{check_connection, create_pool};
use digest_profiles_backend::infrastructure::http::start_http_server;
use digest_profiles_backend::infrastructure::repositories::ProfileRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Digest Profiles Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    tracing::info!(
        max_connections = config.database_max_connections,
        "Database connection pool created"
    );

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let profile_repo = Arc::new(ProfileRepository::new(pool.clone()));
    let profile_service = Arc::new(ProfileService::new(profile_repo));
    let profile_controller = Arc::new(ProfileController::new(profile_service));

    start_http_server(pool, config, profile_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "digest_profiles_backend=debug,tower_http=debug"
    } else {
        "digest_profiles_backend=info,tower_http=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
