//! Property and reservation records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Property joined with its average review rating
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyRow {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
    pub average_rating: f64,
}

/// Past reservation with the reserved property
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ReservationRow {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: PropertyRow,
}

/// Listing fields supplied by an owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// Listing held by the in-memory store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    #[serde(flatten)]
    pub listing: NewProperty,
}
