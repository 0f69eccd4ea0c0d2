//! Property search criteria

/// Optional constraints for a property search.
///
/// Every field is independent; `None` means no constraint on that
/// dimension. Prices are in the same unit as `properties.cost_per_night`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyCriteria {
    /// `LIKE` pattern matched against `properties.city`
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i32>,
    pub maximum_price_per_night: Option<i32>,
    /// Lower bound on the average review rating
    pub minimum_rating: Option<f64>,
}

impl PropertyCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, pattern: impl Into<String>) -> Self {
        self.city = Some(pattern.into());
        self
    }

    /// Match cities containing `fragment` anywhere.
    ///
    /// `%`, `_` and `\` in the fragment match literally; backslash is the
    /// default `LIKE` escape character in PostgreSQL.
    pub fn city_containing(self, fragment: &str) -> Self {
        let mut pattern = String::with_capacity(fragment.len() + 2);
        pattern.push('%');
        for c in fragment.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        self.city(pattern)
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn minimum_price_per_night(mut self, price: i32) -> Self {
        self.minimum_price_per_night = Some(price);
        self
    }

    pub fn maximum_price_per_night(mut self, price: i32) -> Self {
        self.maximum_price_per_night = Some(price);
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// Number of populated constraints.
    pub fn populated(&self) -> usize {
        [
            self.city.is_some(),
            self.owner_id.is_some(),
            self.minimum_price_per_night.is_some(),
            self.maximum_price_per_night.is_some(),
            self.minimum_rating.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        assert!(PropertyCriteria::new().is_empty());
    }

    #[test]
    fn counts_populated_fields() {
        let criteria = PropertyCriteria::new()
            .owner_id(3)
            .minimum_price_per_night(100)
            .minimum_rating(4.0);
        assert_eq!(criteria.populated(), 3);
        assert!(criteria.city.is_none());
    }

    #[test]
    fn city_containing_wraps_fragment() {
        let criteria = PropertyCriteria::new().city_containing("ancouv");
        assert_eq!(criteria.city.as_deref(), Some("%ancouv%"));
    }

    #[test]
    fn city_containing_escapes_wildcards() {
        let criteria = PropertyCriteria::new().city_containing("a_b%c\\");
        assert_eq!(criteria.city.as_deref(), Some(r"%a\_b\%c\\%"));
    }
}
