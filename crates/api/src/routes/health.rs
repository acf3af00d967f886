//! Liveness endpoint mounted at `/health`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// `healthy`, or `degraded` when the database check fails.
    pub status: &'static str,
    pub message: &'static str,
    /// `connected` or `disconnected`.
    pub database: &'static str,
}

impl HealthStatus {
    fn from_db_check(db_reachable: bool) -> Self {
        if db_reachable {
            Self {
                status: "healthy",
                message: "API is up and running",
                database: "connected",
            }
        } else {
            Self {
                status: "degraded",
                message: "Database is unreachable",
                database: "disconnected",
            }
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_reachable = match notekeeper_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };
    Json(HealthStatus::from_db_check(db_reachable))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
