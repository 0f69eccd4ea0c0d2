//! Health check endpoint
//!
//! Reports whether the database answers a trivial query. The in-memory
//! store cannot fail, so only its size is reported.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub stored_properties: usize,
}

/// GET /health - 200 when the database answers, 503 otherwise
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let database_ok = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("health check: database unreachable: {}", e);
            false
        }
    };

    let (status, body_status, database) = if database_ok {
        (StatusCode::OK, "ok", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
    };

    (
        status,
        Json(HealthResponse {
            status: body_status,
            database,
            stored_properties: state.properties.len().await,
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
