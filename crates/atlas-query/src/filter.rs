use regex::Regex;
use serde_json::Value;

use crate::error::QueryError;
use crate::field::Field;

/// A single field condition. Comparison values keep the JSON type they
/// arrived with; type mismatches are resolved at evaluation time as a
/// silent non-match.
#[derive(Debug, Clone)]
pub enum Condition {
    Eq(Field, Value),
    Gt(Field, Value),
    Gte(Field, Value),
    Lt(Field, Value),
    Lte(Field, Value),
    /// Case-insensitive substring match, compiled to a `(?i)` pattern.
    IContains(Field, Regex),
}

impl Condition {
    /// Build a case-insensitive substring condition. The needle is escaped
    /// first, so the pattern carries no metacharacters from the request.
    pub fn icontains(field: Field, needle: &str) -> Result<Condition, QueryError> {
        let pattern = format!("(?i){}", regex::escape(needle));
        let re = Regex::new(&pattern)
            .map_err(|e| QueryError::MalformedFilter(format!("invalid search pattern: {e}")))?;
        Ok(Condition::IContains(field, re))
    }
}

/// Conjunction of conditions; a record matches when every condition holds.
/// Empty matches everything.
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    pub conditions: Vec<Condition>,
}

impl Predicate {
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icontains_escapes_metacharacters() {
        let cond = Condition::icontains(Field::Name, "st. (old)").unwrap();
        match cond {
            Condition::IContains(Field::Name, re) => {
                assert!(re.is_match("East ST. (OLD) Town"));
                assert!(!re.is_match("st x old"));
            }
            _ => panic!("expected IContains"),
        }
    }

    #[test]
    fn icontains_is_case_insensitive() {
        let cond = Condition::icontains(Field::Name, "spr").unwrap();
        match cond {
            Condition::IContains(_, re) => {
                assert!(re.is_match("Springfield"));
                assert!(re.is_match("SPRINGER"));
                assert!(!re.is_match("Denver"));
            }
            _ => panic!("expected IContains"),
        }
    }
}
