//! Reservation endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::db::ReservationRepo;
use crate::http::error::ApiError;
use crate::http::params::LimitParams;
use crate::http::server::AppState;
use crate::models::ReservationRow;

/// GET /api/reservations/{guest_id} - a guest's completed stays
async fn list_reservations(
    State(state): State<Arc<AppState>>,
    Path(guest_id): Path<i32>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<ReservationRow>>, ApiError> {
    let limit = params.limit()?;
    let reservations = ReservationRepo::new(&state.pool)
        .list_past_for_guest(guest_id, limit)
        .await?;
    Ok(Json(reservations))
}

/// Reservation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/reservations/{guest_id}", get(list_reservations))
}
