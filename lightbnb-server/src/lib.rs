//! lightbnb-server: data access and HTTP surface for LightBnB
//!
//! Property search with dynamic filters, user and reservation lookups
//! backed by PostgreSQL, and an in-memory store for new listings.

pub mod db;
pub mod http;
pub mod models;
pub mod query;
pub mod store;

pub use db::{DbError, PropertyRepo, QueryExecutor, ReservationRepo, UserRepo};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{PropertyCriteria, ResultLimit};
pub use store::MemoryPropertyStore;
