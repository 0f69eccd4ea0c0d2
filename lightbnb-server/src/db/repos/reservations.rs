//! Reservation repository

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{ReservationRow, ResultLimit};

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Completed reservations for a guest, earliest first.
    ///
    /// Each row carries the reserved property and its average rating.
    pub async fn list_past_for_guest(
        &self,
        guest_id: i32,
        limit: ResultLimit,
    ) -> Result<Vec<ReservationRow>, DbError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT
                properties.*,
                reservations.id AS reservation_id,
                reservations.guest_id,
                reservations.start_date,
                reservations.end_date,
                avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            AND reservations.end_date < now()::date
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(guest_id, count = rows.len(), "past reservations loaded");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn honours_requested_limit() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        let rows = ReservationRepo::new(&pool)
            .list_past_for_guest(1, ResultLimit::new(2).unwrap())
            .await
            .unwrap();

        assert!(rows.len() <= 2);
        assert!(rows.windows(2).all(|w| w[0].start_date <= w[1].start_date));
        assert!(rows.iter().all(|r| r.guest_id == 1));
    }
}
