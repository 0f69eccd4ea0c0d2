//! User repository
//!
//! Lookups by email and id, plus creation. Errors propagate; a missing user
//! is only "no result" for the email lookup, which login-style callers check first.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user by email, `None` if nobody uses it.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a single user by id.
    pub async fn get_by_id(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "user",
            id: id.to_string(),
        })
    }

    /// Insert a user and return the stored record.
    ///
    /// A duplicate email surfaces as `DbError::Conflict`.
    pub async fn create(&self, user: &NewUser) -> Result<User, DbError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::conflict_on_unique(e, "user"))?;

        tracing::info!(user_id = created.id, "user created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set against the LightBnB schema
    // cargo test -p lightbnb-server -- --ignored

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        crate::db::create_pool(&url).await.expect("pool creation failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_lookup() {
        let pool = pool().await;
        let repo = UserRepo::new(&pool);
        let email = format!("guest-{}@example.com", std::process::id());

        let created = repo
            .create(&NewUser {
                name: "Test Guest".into(),
                email: email.clone(),
                password: "password".into(),
            })
            .await
            .unwrap();

        let by_email = repo.get_by_email(&email).await.unwrap();
        assert_eq!(by_email.as_ref().map(|u| u.id), Some(created.id));

        let by_id = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(by_id.email, email);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_email_is_conflict() {
        let pool = pool().await;
        let repo = UserRepo::new(&pool);
        let user = NewUser {
            name: "Twice".into(),
            email: format!("twice-{}@example.com", std::process::id()),
            password: "password".into(),
        };

        repo.create(&user).await.unwrap();
        let err = repo.create(&user).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { resource: "user" }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_user_by_id_is_not_found() {
        let pool = pool().await;
        let err = UserRepo::new(&pool).get_by_id(-1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "user", .. }));
    }
}
