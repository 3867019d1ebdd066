//! BookInstance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    error::AppResult,
    models::{book::Book, enums::InstanceStatus},
    validate::{Rule, Violations},
};

/// Full book instance model from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: i64,
    pub imprint: String,
    pub status: InstanceStatus,
    pub due_back: Option<NaiveDate>,
    pub book_id: i64,
}

impl BookInstance {
    /// Canonical URL path for this copy.
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    /// Due date formatted "medium date with weekday" style, e.g.
    /// "Mon, Apr 06 1992". Empty when no due date is set.
    pub fn due_back_formatted(&self) -> String {
        match self.due_back {
            Some(d) => d.format("%a, %b %d %Y").to_string(),
            None => String::new(),
        }
    }
}

/// Instance list row with its book's title
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookInstanceListItem {
    pub id: i64,
    pub imprint: String,
    pub status: InstanceStatus,
    pub due_back: Option<NaiveDate>,
    pub book_id: i64,
    pub book_title: String,
}

/// Field set for creating or fully updating a book instance.
///
/// A missing status defaults to Maintenance; a missing due date defaults
/// to today at create time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookInstanceFields {
    pub imprint: String,
    pub status: Option<InstanceStatus>,
    pub due_back: Option<NaiveDate>,
    pub book_id: i64,
}

impl BookInstanceFields {
    pub fn validate(&self) -> AppResult<()> {
        let mut v = Violations::new();
        v.check("imprint", Some(&self.imprint), Rule::Required);
        v.into_result()
    }
}

/// Instance plus its book
#[derive(Debug, Clone, Serialize)]
pub struct BookInstanceDetail {
    pub instance: BookInstance,
    pub book: Book,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(due: Option<NaiveDate>) -> BookInstance {
        BookInstance {
            id: 12,
            imprint: "Gollancz, 2007".to_string(),
            status: InstanceStatus::Available,
            due_back: due,
            book_id: 7,
        }
    }

    #[test]
    fn url_path() {
        assert_eq!(instance(None).url(), "/catalog/bookinstance/12");
    }

    #[test]
    fn due_date_formats_with_weekday() {
        let due = NaiveDate::from_ymd_opt(1992, 4, 6).unwrap();
        assert_eq!(instance(Some(due)).due_back_formatted(), "Mon, Apr 06 1992");
    }

    #[test]
    fn missing_due_date_formats_empty() {
        assert_eq!(instance(None).due_back_formatted(), "");
    }

    #[test]
    fn imprint_is_required() {
        let fields = BookInstanceFields {
            imprint: " ".to_string(),
            book_id: 7,
            ..Default::default()
        };
        assert!(fields.validate().is_err());
    }
}
