//! Query-string parameters
//!
//! Search forms submit every field, filled or not, so empty strings are
//! treated as absent before parsing.

use std::str::FromStr;

use serde::Deserialize;

use crate::models::{PropertyCriteria, ResultLimit, ValidationError};

/// Parse an optional form field, mapping blank input to `None`.
pub fn parse_optional<T: FromStr>(
    field: &'static str,
    value: Option<&str>,
    reason: &'static str,
) -> Result<Option<T>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ValidationError::InvalidFormat { field, reason }),
    }
}

/// Optional `?limit=` on list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

impl LimitParams {
    pub fn limit(&self) -> Result<ResultLimit, ValidationError> {
        let limit = parse_optional("limit", self.limit.as_deref(), "expected a positive integer")?;
        ResultLimit::from_optional(limit)
    }
}

/// `GET /api/properties` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySearchParams {
    pub city: Option<String>,
    pub owner_id: Option<String>,
    pub minimum_price_per_night: Option<String>,
    pub maximum_price_per_night: Option<String>,
    pub minimum_rating: Option<String>,
    pub limit: Option<String>,
}

impl PropertySearchParams {
    /// Build search criteria; `city` matches anywhere in the city name.
    pub fn criteria(&self) -> Result<PropertyCriteria, ValidationError> {
        let city = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let criteria = PropertyCriteria {
            city: None,
            owner_id: parse_optional("owner_id", self.owner_id.as_deref(), "expected an integer")?,
            minimum_price_per_night: parse_optional(
                "minimum_price_per_night",
                self.minimum_price_per_night.as_deref(),
                "expected an integer",
            )?,
            maximum_price_per_night: parse_optional(
                "maximum_price_per_night",
                self.maximum_price_per_night.as_deref(),
                "expected an integer",
            )?,
            minimum_rating: parse_optional(
                "minimum_rating",
                self.minimum_rating.as_deref(),
                "expected a number",
            )?,
        };

        Ok(match city {
            Some(fragment) => criteria.city_containing(fragment),
            None => criteria,
        })
    }

    pub fn limit(&self) -> Result<ResultLimit, ValidationError> {
        LimitParams {
            limit: self.limit.clone(),
        }
        .limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_absent() {
        let params = PropertySearchParams {
            city: Some("  ".into()),
            owner_id: Some(String::new()),
            minimum_price_per_night: Some(String::new()),
            maximum_price_per_night: None,
            minimum_rating: Some("".into()),
            limit: Some("".into()),
        };

        assert!(params.criteria().unwrap().is_empty());
        assert_eq!(params.limit().unwrap(), ResultLimit::default());
    }

    #[test]
    fn city_becomes_contains_pattern() {
        let params = PropertySearchParams {
            city: Some("Vancouver".into()),
            minimum_rating: Some("4".into()),
            ..Default::default()
        };

        let criteria = params.criteria().unwrap();
        assert_eq!(criteria.city.as_deref(), Some("%Vancouver%"));
        assert_eq!(criteria.minimum_rating, Some(4.0));
    }

    #[test]
    fn city_wildcards_match_literally() {
        let params = PropertySearchParams {
            city: Some(" _ ".into()),
            ..Default::default()
        };

        let criteria = params.criteria().unwrap();
        assert_eq!(criteria.city.as_deref(), Some(r"%\_%"));
    }

    #[test]
    fn rejects_non_numeric_owner() {
        let params = PropertySearchParams {
            owner_id: Some("abc".into()),
            ..Default::default()
        };

        assert!(matches!(
            params.criteria().unwrap_err(),
            ValidationError::InvalidFormat { field: "owner_id", .. }
        ));
    }

    #[test]
    fn rejects_zero_limit() {
        let params = LimitParams {
            limit: Some("0".into()),
        };
        assert!(params.limit().is_err());
    }
}
