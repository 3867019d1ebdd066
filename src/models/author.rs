//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    error::AppResult,
    models::book::BookSummary,
    validate::{Rule, Violations},
};

/// Full author model from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name, "family_name, first_name". Empty when either half is
    /// missing.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Lifespan string from birth and death dates, ISO short-date format:
    /// "1920-01-02 - 1992-04-06", "1973-06-06 - present" when the author
    /// is alive, "Unknown" when the birth date is absent.
    pub fn lifespan(&self) -> String {
        let Some(birth) = self.date_of_birth else {
            return "Unknown".to_string();
        };
        let death = match self.date_of_death {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "present".to_string(),
        };
        format!("{} - {}", birth.format("%Y-%m-%d"), death)
    }

    /// Canonical URL path for this author.
    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }
}

/// Field set for creating or fully updating an author
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorFields {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorFields {
    /// Rule list for the author entity. Dates carry no constraints: the
    /// birth/death ordering is deliberately not checked.
    pub fn validate(&self) -> AppResult<()> {
        let mut v = Violations::new();
        v.check("first_name", Some(&self.first_name), Rule::Required)
            .check("first_name", Some(&self.first_name), Rule::MaxLen(100))
            .check("family_name", Some(&self.family_name), Rule::Required)
            .check("family_name", Some(&self.family_name), Rule::MaxLen(100));
        v.into_result()
    }
}

/// Author plus their books, ordered by title
#[derive(Debug, Clone, Serialize)]
pub struct AuthorDetail {
    pub author: Author,
    pub books: Vec<BookSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(birth: Option<&str>, death: Option<&str>) -> Author {
        let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        Author {
            id: 1,
            first_name: "Patrick".to_string(),
            family_name: "Rothfuss".to_string(),
            date_of_birth: birth.map(parse),
            date_of_death: death.map(parse),
        }
    }

    #[test]
    fn name_is_family_comma_first() {
        assert_eq!(author(None, None).name(), "Rothfuss, Patrick");
    }

    #[test]
    fn name_is_empty_when_a_half_is_missing() {
        let mut a = author(None, None);
        a.first_name = String::new();
        assert_eq!(a.name(), "");
    }

    #[test]
    fn lifespan_of_living_author() {
        assert_eq!(
            author(Some("1973-06-06"), None).lifespan(),
            "1973-06-06 - present"
        );
    }

    #[test]
    fn lifespan_with_both_dates() {
        assert_eq!(
            author(Some("1920-01-02"), Some("1992-04-06")).lifespan(),
            "1920-01-02 - 1992-04-06"
        );
    }

    #[test]
    fn lifespan_unknown_without_birth_date() {
        assert_eq!(author(None, None).lifespan(), "Unknown");
        // a death date alone does not make the lifespan known
        assert_eq!(author(None, Some("1992-04-06")).lifespan(), "Unknown");
    }

    #[test]
    fn url_path() {
        assert_eq!(author(None, None).url(), "/catalog/author/1");
    }

    #[test]
    fn validation_collects_every_violated_field() {
        let fields = AuthorFields {
            first_name: "  ".to_string(),
            family_name: "x".repeat(101),
            ..Default::default()
        };
        let err = fields.validate().unwrap_err();
        match err {
            crate::AppError::Validation(violations) => {
                let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
                assert_eq!(fields, vec!["first_name", "family_name"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn death_before_birth_is_not_rejected() {
        let fields = AuthorFields {
            first_name: "Ada".to_string(),
            family_name: "Lovelace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1852, 11, 27),
            date_of_death: NaiveDate::from_ymd_opt(1815, 12, 10),
        };
        assert!(fields.validate().is_ok());
    }
}
