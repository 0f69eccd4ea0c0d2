//! Query execution seam
//!
//! Dynamic queries go through `QueryExecutor` rather than straight to the
//! pool, so the assembled SQL and parameters can be observed without a
//! database.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::PropertyRow;
use crate::query::{BuiltQuery, SqlParam};

/// Runs a built query and decodes property rows
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn fetch_properties(&self, query: &BuiltQuery) -> Result<Vec<PropertyRow>, sqlx::Error>;
}

#[async_trait]
impl QueryExecutor for PgPool {
    async fn fetch_properties(&self, query: &BuiltQuery) -> Result<Vec<PropertyRow>, sqlx::Error> {
        let mut prepared = sqlx::query_as::<_, PropertyRow>(&query.sql);
        for param in &query.params {
            prepared = match param {
                SqlParam::Text(value) => prepared.bind(value.as_str()),
                SqlParam::Int(value) => prepared.bind(*value),
                SqlParam::BigInt(value) => prepared.bind(*value),
                SqlParam::Float(value) => prepared.bind(*value),
            };
        }

        prepared.fetch_all(self).await
    }
}
