//! User endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{NewUser, User};

/// `GET /users?email=` query
#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(user): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = UserRepo::new(&state.pool).create(&user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users?email= - look a user up by email
async fn find_user(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<User>, ApiError> {
    UserRepo::new(&state.pool)
        .get_by_email(&query.email)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound {
            resource: "user",
            id: query.email,
        })
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    let user = UserRepo::new(&state.pool).get_by_id(id).await?;
    Ok(Json(user))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(find_user).post(create_user))
        .route("/users/{id}", get(get_user))
}
