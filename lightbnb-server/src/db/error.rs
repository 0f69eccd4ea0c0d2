//! Database error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} already exists")]
    Conflict { resource: &'static str },

    /// Generated SQL broke its own placeholder or clause ordering rules.
    /// Always a bug in query assembly, never a caller error.
    #[error("malformed query: {reason}")]
    MalformedQuery { reason: String },
}

impl DbError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedQuery {
            reason: reason.into(),
        }
    }

    /// Map a unique-constraint violation to `Conflict`, pass anything else through.
    pub fn conflict_on_unique(err: sqlx::Error, resource: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict { resource },
            _ => Self::Sqlx(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DbError::NotFound {
            resource: "user",
            id: "42".into(),
        };
        assert_eq!(err.to_string(), "not found: user '42'");

        let err = DbError::malformed("HAVING without GROUP BY");
        assert_eq!(err.to_string(), "malformed query: HAVING without GROUP BY");
    }

    #[test]
    fn non_database_errors_are_not_conflicts() {
        let err = DbError::conflict_on_unique(sqlx::Error::PoolTimedOut, "user");
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::PoolTimedOut)));
    }
}
