//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Fields for inserting a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
