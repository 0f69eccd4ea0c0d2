//! Result limit for list queries

use super::ValidationError;

/// Default number of rows returned by list queries
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest limit a caller may request
pub const MAX_LIMIT: u32 = 100;

/// Validated, positive row limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimit(u32);

impl ResultLimit {
    /// Create a limit.
    ///
    /// # Rules
    /// - At least 1
    /// - At most 100
    ///
    /// # Example
    /// ```
    /// use lightbnb_server::models::ResultLimit;
    ///
    /// assert!(ResultLimit::new(5).is_ok());
    /// assert!(ResultLimit::new(0).is_err());
    /// assert!(ResultLimit::new(101).is_err());
    /// ```
    pub fn new(limit: u32) -> Result<Self, ValidationError> {
        if limit == 0 || limit > MAX_LIMIT {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1,
                max: MAX_LIMIT as i64,
            });
        }
        Ok(Self(limit))
    }

    /// Resolve an optional request value, falling back to the default.
    pub fn from_optional(limit: Option<u32>) -> Result<Self, ValidationError> {
        limit.map_or(Ok(Self::default()), Self::new)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Value as bound to a `LIMIT` placeholder.
    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten() {
        assert_eq!(ResultLimit::default().get(), 10);
    }

    #[test]
    fn bounds() {
        assert!(ResultLimit::new(1).is_ok());
        assert!(ResultLimit::new(100).is_ok());
        assert!(matches!(
            ResultLimit::new(0).unwrap_err(),
            ValidationError::OutOfRange { field: "limit", .. }
        ));
        assert!(ResultLimit::new(101).is_err());
    }

    #[test]
    fn optional_falls_back_to_default() {
        assert_eq!(ResultLimit::from_optional(None).unwrap().get(), 10);
        assert_eq!(ResultLimit::from_optional(Some(3)).unwrap().get(), 3);
        assert!(ResultLimit::from_optional(Some(0)).is_err());
    }
}
