//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    error::AppResult,
    models::{author::Author, book_instance::BookInstance, genre::Genre},
    validate::{Rule, Violations},
};

/// Full book model from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: i64,
}

impl Book {
    /// Canonical URL path for this book.
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

/// Reduced book row used in detail views and conflict reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    pub summary: String,
}

/// Book list row with its author's name fields
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookListItem {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub author_first_name: String,
    pub author_family_name: String,
}

/// Field set for creating or fully updating a book.
///
/// `genre_ids` drives the Book<->Genre link set: `Some(set)` replaces the
/// entire link set (idempotent), `None` means no genres at create time and
/// leaves existing links untouched at update time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: i64,
    pub genre_ids: Option<Vec<i64>>,
}

impl BookFields {
    pub fn validate(&self) -> AppResult<()> {
        let mut v = Violations::new();
        v.check("title", Some(&self.title), Rule::Required)
            .check("summary", Some(&self.summary), Rule::Required)
            .check("isbn", Some(&self.isbn), Rule::Required);
        v.into_result()
    }
}

/// Book plus all directly related records
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    pub book: Book,
    pub author: Author,
    pub genres: Vec<Genre>,
    /// Physical copies, ordered by id
    pub instances: Vec<BookInstance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_path() {
        let book = Book {
            id: 7,
            title: "The Name of the Wind".to_string(),
            summary: "A hero's childhood".to_string(),
            isbn: "9781473211896".to_string(),
            author_id: 1,
        };
        assert_eq!(book.url(), "/catalog/book/7");
    }

    #[test]
    fn every_missing_field_is_reported() {
        let err = BookFields::default().validate().unwrap_err();
        match err {
            crate::AppError::Validation(violations) => {
                let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
                assert_eq!(fields, vec!["title", "summary", "isbn"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
