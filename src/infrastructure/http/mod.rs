pub mod extract;
pub mod request_id;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, profile::ProfileController};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and middleware
pub fn create_router(
    pool: Arc<DbPool>,
    config: &Config,
    profile_controller: Arc<ProfileController>,
) -> Router {
    let profile_routes = Router::new()
        .route(
            "/api/save-profile",
            get(ProfileController::get_profiles)
                .post(ProfileController::save_profile)
                .put(ProfileController::update_profile)
                .delete(ProfileController::delete_profile),
        )
        .with_state(profile_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(profile_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_secs,
                ))),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    profile_controller: Arc<ProfileController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(pool, &config, profile_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
