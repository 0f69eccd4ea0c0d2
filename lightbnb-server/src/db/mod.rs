//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared through state, never a held connection
//! - One statement per operation, ratings aggregated with JOINs
//! - Failures propagate as `DbError`; nothing is swallowed into empty results

pub mod error;
pub mod executor;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use executor::QueryExecutor;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
