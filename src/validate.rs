//! Field validation engine
//!
//! Every entity declares an ordered list of (field, rule) checks. Checks
//! are evaluated independently and all violations are collected, so a
//! caller gets the complete error set back in one pass instead of fixing
//! constraints one at a time.

use crate::error::{AppError, AppResult, FieldViolation};

/// A single field constraint. Length bounds are inclusive and counted in
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Missing, empty, or whitespace-only fails.
    Required,
    MaxLen(usize),
    LenBetween(usize, usize),
    /// Passes when absent; a present but whitespace-only value fails.
    NotBlank,
}

impl Rule {
    fn message(&self) -> String {
        match self {
            Rule::Required => "is required".to_string(),
            Rule::MaxLen(max) => format!("must be at most {} characters", max),
            Rule::LenBetween(min, max) => {
                format!("must be between {} and {} characters", min, max)
            }
            Rule::NotBlank => "cannot be empty or whitespace only".to_string(),
        }
    }

    fn holds(&self, value: Option<&str>) -> bool {
        match self {
            Rule::Required => value.map(str::trim).is_some_and(|v| !v.is_empty()),
            Rule::MaxLen(max) => match value {
                Some(v) => v.chars().count() <= *max,
                None => true,
            },
            Rule::LenBetween(min, max) => match value {
                Some(v) => {
                    let len = v.chars().count();
                    len >= *min && len <= *max
                }
                None => true,
            },
            Rule::NotBlank => match value {
                Some(v) => !v.trim().is_empty(),
                None => true,
            },
        }
    }
}

/// Collector for an entity's rule list.
#[derive(Debug, Default)]
pub struct Violations {
    collected: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one rule against a field value, recording the violation if
    /// it does not hold. Never short-circuits.
    pub fn check(&mut self, field: &'static str, value: Option<&str>, rule: Rule) -> &mut Self {
        if !rule.holds(value) {
            self.collected.push(FieldViolation {
                field,
                message: rule.message(),
            });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }

    /// Finish the rule list: `Ok(())` when clean, otherwise a validation
    /// error carrying every collected violation in rule order.
    pub fn into_result(self) -> AppResult<()> {
        if self.collected.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.collected))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_missing_empty_and_whitespace() {
        assert!(!Rule::Required.holds(None));
        assert!(!Rule::Required.holds(Some("")));
        assert!(!Rule::Required.holds(Some("   ")));
        assert!(Rule::Required.holds(Some("ok")));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(Rule::LenBetween(3, 100).holds(Some("abc")));
        assert!(!Rule::LenBetween(3, 100).holds(Some("ab")));
        assert!(Rule::MaxLen(3).holds(Some("abc")));
        assert!(!Rule::MaxLen(3).holds(Some("abcd")));
    }

    #[test]
    fn length_rules_count_chars_not_bytes() {
        // "héll" is four characters but five bytes
        assert!(Rule::MaxLen(4).holds(Some("héll")));
        assert!(Rule::LenBetween(3, 5).holds(Some("héllo")));
    }

    #[test]
    fn optional_rules_pass_on_absent_values() {
        assert!(Rule::MaxLen(5).holds(None));
        assert!(Rule::LenBetween(3, 5).holds(None));
        assert!(Rule::NotBlank.holds(None));
        assert!(!Rule::NotBlank.holds(Some("  ")));
    }

    #[test]
    fn all_violations_are_collected_in_order() {
        let mut v = Violations::new();
        v.check("first_name", Some(""), Rule::Required)
            .check("family_name", Some(""), Rule::Required)
            .check("name", Some("ab"), Rule::LenBetween(3, 100));

        let err = v.into_result().unwrap_err();
        match err {
            AppError::Validation(violations) => {
                let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
                assert_eq!(fields, vec!["first_name", "family_name", "name"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
