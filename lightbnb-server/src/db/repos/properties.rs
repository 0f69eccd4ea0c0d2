//! Property repository
//!
//! Filtered search over properties joined with their review ratings.

use sqlx::PgPool;

use crate::db::{DbError, QueryExecutor};
use crate::models::{PropertyCriteria, PropertyRow, ResultLimit};
use crate::query::PropertySearch;

/// Property repository
pub struct PropertyRepo<'a, E: ?Sized = PgPool> {
    executor: &'a E,
}

impl<'a, E> PropertyRepo<'a, E>
where
    E: QueryExecutor + ?Sized,
{
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Search properties, cheapest first.
    ///
    /// Exactly one statement is executed. Execution failures are returned,
    /// never replaced by an empty list.
    pub async fn search(
        &self,
        criteria: &PropertyCriteria,
        limit: ResultLimit,
    ) -> Result<Vec<PropertyRow>, DbError> {
        let query = PropertySearch::new(criteria, limit).build()?;
        tracing::debug!(sql = %query.sql, params = query.params.len(), "property search");

        let rows = self.executor.fetch_properties(&query).await?;
        Ok(rows)
    }
}
