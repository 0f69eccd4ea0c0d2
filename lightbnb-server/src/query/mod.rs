//! Parameterized SQL assembly
//!
//! Queries are built as an ordered list of tagged clauses and rendered to
//! text plus a positional parameter list in one pass. Placeholders
//! (`$1`, `$2`, ...) are assigned at render time, so the Nth placeholder
//! always refers to the Nth parameter.

pub mod property_search;

pub use property_search::{Clause, Predicate, PropertySearch};

use crate::db::DbError;

/// Value bound to one positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    BigInt(i64),
    Float(f64),
}

/// Rendered SQL text with its ordered parameters
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl BuiltQuery {
    /// Placeholder ordinals in order of appearance.
    pub fn placeholders(&self) -> Vec<usize> {
        let bytes = self.sql.as_bytes();
        let mut ordinals = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'$' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if end > start {
                    if let Ok(n) = self.sql[start..end].parse() {
                        ordinals.push(n);
                    }
                }
                i = end.max(start);
            } else {
                i += 1;
            }
        }

        ordinals
    }

    /// Check that placeholders read `$1..=$n` in order and `n` matches the
    /// parameter count.
    pub fn verify(&self) -> Result<(), DbError> {
        let ordinals = self.placeholders();

        if ordinals.len() != self.params.len() {
            return Err(DbError::malformed(format!(
                "{} placeholders for {} parameters",
                ordinals.len(),
                self.params.len()
            )));
        }

        for (position, ordinal) in ordinals.iter().enumerate() {
            if *ordinal != position + 1 {
                return Err(DbError::malformed(format!(
                    "placeholder ${} found at position {}",
                    ordinal,
                    position + 1
                )));
            }
        }

        Ok(())
    }
}
