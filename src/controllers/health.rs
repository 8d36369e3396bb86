use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::db::{check_connection, pool_status, DbPool, PoolStatus};

/// Readiness body for `/health/ready`
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub connections: PoolStatus,
}

/// GET /health - Liveness, never touches the database
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /health/ready - 200 once the store answers, 503 otherwise
pub async fn health_ready(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let (status, readiness) = match check_connection(&pool).await {
        Ok(()) => (
            StatusCode::OK,
            ReadinessResponse {
                status: "ready",
                database: "connected",
                connections: pool_status(&pool),
            },
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ReadinessResponse {
                    status: "not_ready",
                    database: "disconnected",
                    connections: pool_status(&pool),
                },
            )
        }
    };

    (status, Json(readiness))
}
