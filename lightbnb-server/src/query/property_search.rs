//! Property search query
//!
//! Filters are evaluated in a fixed order: city, owner, minimum price,
//! maximum price. The first filter rendered opens with `WHERE`, every later
//! one with `AND`. A minimum rating constrains the aggregate, so it becomes a
//! `HAVING` clause after the grouping. The limit is always the last
//! parameter.

use super::{BuiltQuery, SqlParam};
use crate::db::DbError;
use crate::models::{PropertyCriteria, ResultLimit};

const BASE_SQL: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Row-level predicate for one filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    CityLike,
    OwnerIs,
    MinimumPrice,
    MaximumPrice,
}

impl Predicate {
    /// Predicate text preceding the placeholder.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::CityLike => "city LIKE",
            Self::OwnerIs => "owner_id =",
            Self::MinimumPrice => "cost_per_night >=",
            Self::MaximumPrice => "cost_per_night <=",
        }
    }
}

/// One tagged fragment of the search query
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Filter { predicate: Predicate, value: SqlParam },
    GroupBy,
    Having { minimum_rating: SqlParam },
    OrderBy,
    Limit { value: SqlParam },
}

/// Property search as an ordered clause list
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearch {
    clauses: Vec<Clause>,
}

impl PropertySearch {
    pub fn new(criteria: &PropertyCriteria, limit: ResultLimit) -> Self {
        let mut clauses = Vec::with_capacity(8);

        let filters = [
            (Predicate::CityLike, criteria.city.clone().map(SqlParam::Text)),
            (Predicate::OwnerIs, criteria.owner_id.map(SqlParam::Int)),
            (
                Predicate::MinimumPrice,
                criteria.minimum_price_per_night.map(SqlParam::Int),
            ),
            (
                Predicate::MaximumPrice,
                criteria.maximum_price_per_night.map(SqlParam::Int),
            ),
        ];

        for (predicate, value) in filters {
            if let Some(value) = value {
                clauses.push(Clause::Filter { predicate, value });
            }
        }

        clauses.push(Clause::GroupBy);
        if let Some(rating) = criteria.minimum_rating {
            clauses.push(Clause::Having {
                minimum_rating: SqlParam::Float(rating),
            });
        }
        clauses.push(Clause::OrderBy);
        clauses.push(Clause::Limit {
            value: SqlParam::BigInt(limit.as_i64()),
        });

        Self { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Render to SQL text and parameters.
    pub fn build(&self) -> Result<BuiltQuery, DbError> {
        render(&self.clauses)
    }
}

/// Position reached while rendering; clauses must not move backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Filters,
    Grouped,
    Having,
    Ordered,
    Limited,
}

fn render(clauses: &[Clause]) -> Result<BuiltQuery, DbError> {
    let mut sql = String::from(BASE_SQL);
    let mut params = Vec::with_capacity(clauses.len());
    let mut stage = Stage::Filters;
    let mut filters = 0usize;

    for clause in clauses {
        let next = match clause {
            Clause::Filter { .. } => Stage::Filters,
            Clause::GroupBy => Stage::Grouped,
            Clause::Having { .. } => Stage::Having,
            Clause::OrderBy => Stage::Ordered,
            Clause::Limit { .. } => Stage::Limited,
        };
        let repeats = next == stage && next != Stage::Filters;
        if next < stage || repeats {
            return Err(DbError::malformed(format!(
                "{:?} clause cannot follow {:?}",
                next, stage
            )));
        }
        if next == Stage::Having && stage != Stage::Grouped {
            return Err(DbError::malformed("HAVING without GROUP BY"));
        }
        stage = next;

        let fragment = match clause {
            Clause::Filter { predicate, value } => {
                let keyword = if filters == 0 { "WHERE" } else { "AND" };
                filters += 1;
                params.push(value.clone());
                format!("\n{} {} ${}", keyword, predicate.as_sql(), params.len())
            }
            Clause::GroupBy => "\nGROUP BY properties.id".to_owned(),
            Clause::Having { minimum_rating } => {
                params.push(minimum_rating.clone());
                format!(
                    "\nHAVING avg(property_reviews.rating) >= ${}",
                    params.len()
                )
            }
            Clause::OrderBy => "\nORDER BY cost_per_night ASC".to_owned(),
            Clause::Limit { value } => {
                params.push(value.clone());
                format!("\nLIMIT ${}", params.len())
            }
        };
        sql.push_str(&fragment);
    }

    if stage != Stage::Limited {
        return Err(DbError::malformed("search query must end with LIMIT"));
    }

    let built = BuiltQuery { sql, params };
    built.verify()?;
    Ok(built)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(criteria: PropertyCriteria, limit: u32) -> BuiltQuery {
        PropertySearch::new(&criteria, ResultLimit::new(limit).unwrap())
            .build()
            .unwrap()
    }

    fn lines_starting(sql: &str, keyword: &str) -> usize {
        sql.lines().filter(|l| l.starts_with(keyword)).count()
    }

    #[test]
    fn empty_criteria_default_limit() {
        let q = PropertySearch::new(&PropertyCriteria::new(), ResultLimit::default())
            .build()
            .unwrap();

        assert!(!q.sql.contains("WHERE"));
        assert!(!q.sql.contains("HAVING"));
        assert!(q.sql.contains("GROUP BY properties.id"));
        assert!(q.sql.contains("ORDER BY cost_per_night ASC"));
        assert!(q.sql.ends_with("LIMIT $1"));
        assert_eq!(q.params, vec![SqlParam::BigInt(10)]);
    }

    #[test]
    fn renders_every_fragment_once() {
        let q = build(PropertyCriteria::new().owner_id(7).minimum_rating(4.5), 3);

        let expected = format!(
            "{}\nWHERE owner_id = $1\nGROUP BY properties.id\n\
             HAVING avg(property_reviews.rating) >= $2\n\
             ORDER BY cost_per_night ASC\nLIMIT $3",
            BASE_SQL
        );
        assert_eq!(q.sql, expected);
    }

    #[test]
    fn city_and_rating_with_limit() {
        let q = build(PropertyCriteria::new().city("anc").minimum_rating(4.0), 5);

        assert_eq!(
            q.params,
            vec![
                SqlParam::Text("anc".into()),
                SqlParam::Float(4.0),
                SqlParam::BigInt(5),
            ]
        );
        assert!(q.sql.contains("WHERE city LIKE $1"));
        assert!(q.sql.contains("HAVING avg(property_reviews.rating) >= $2"));
        assert!(q.sql.contains("LIMIT $3"));
    }

    #[test]
    fn owner_and_price_without_city_opens_with_where() {
        let q = build(
            PropertyCriteria::new()
                .owner_id(12)
                .minimum_price_per_night(5000),
            10,
        );

        assert_eq!(lines_starting(&q.sql, "WHERE "), 1);
        assert_eq!(lines_starting(&q.sql, "AND "), 1);
        assert!(q.sql.contains("WHERE owner_id = $1"));
        assert!(q.sql.contains("AND cost_per_night >= $2"));
        assert_eq!(
            q.params,
            vec![SqlParam::Int(12), SqlParam::Int(5000), SqlParam::BigInt(10)]
        );
    }

    #[test]
    fn single_maximum_price_is_where() {
        let q = build(PropertyCriteria::new().maximum_price_per_night(20000), 10);
        assert!(q.sql.contains("WHERE cost_per_night <= $1"));
        assert_eq!(lines_starting(&q.sql, "AND "), 0);
    }

    #[test]
    fn rating_only_has_no_where() {
        let q = build(PropertyCriteria::new().minimum_rating(3.5), 10);
        assert!(!q.sql.contains("WHERE"));
        assert!(q.sql.contains("GROUP BY properties.id\nHAVING"));
        assert_eq!(q.params.len(), 2);
    }

    #[test]
    fn all_filters_follow_fixed_order() {
        let q = build(
            PropertyCriteria::new()
                .minimum_rating(4.0)
                .maximum_price_per_night(30000)
                .minimum_price_per_night(1000)
                .owner_id(3)
                .city("%Vancouver%"),
            20,
        );

        let body: Vec<&str> = q.sql.lines().skip(3).collect();
        assert_eq!(
            body,
            vec![
                "WHERE city LIKE $1",
                "AND owner_id = $2",
                "AND cost_per_night >= $3",
                "AND cost_per_night <= $4",
                "GROUP BY properties.id",
                "HAVING avg(property_reviews.rating) >= $5",
                "ORDER BY cost_per_night ASC",
                "LIMIT $6",
            ]
        );
    }

    #[test]
    fn render_rejects_filter_after_grouping() {
        let clauses = vec![
            Clause::GroupBy,
            Clause::Filter {
                predicate: Predicate::OwnerIs,
                value: SqlParam::Int(1),
            },
            Clause::OrderBy,
            Clause::Limit {
                value: SqlParam::BigInt(10),
            },
        ];
        assert!(matches!(
            render(&clauses),
            Err(DbError::MalformedQuery { .. })
        ));
    }

    #[test]
    fn render_rejects_having_without_group() {
        let clauses = vec![
            Clause::Having {
                minimum_rating: SqlParam::Float(4.0),
            },
            Clause::OrderBy,
            Clause::Limit {
                value: SqlParam::BigInt(10),
            },
        ];
        assert!(render(&clauses).is_err());
    }

    #[test]
    fn render_requires_limit() {
        let clauses = vec![Clause::GroupBy, Clause::OrderBy];
        assert!(render(&clauses).is_err());
    }
}
