//! Property endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::PropertyRepo;
use crate::http::error::ApiError;
use crate::http::params::PropertySearchParams;
use crate::http::server::AppState;
use crate::models::{NewProperty, Property, PropertyRow};

/// GET /api/properties - search properties, cheapest first
async fn search_properties(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PropertySearchParams>,
) -> Result<Json<Vec<PropertyRow>>, ApiError> {
    let criteria = params.criteria()?;
    let limit = params.limit()?;

    let properties = PropertyRepo::new(&state.pool).search(&criteria, limit).await?;
    Ok(Json(properties))
}

/// POST /api/properties - add a listing to the in-memory store
async fn create_property(
    State(state): State<Arc<AppState>>,
    Json(listing): Json<NewProperty>,
) -> Result<(StatusCode, Json<Property>), ApiError> {
    let property = state.properties.add(listing).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Property routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/properties",
        get(search_properties).post(create_property),
    )
}
