//! Genre model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    error::AppResult,
    models::book::BookSummary,
    validate::{Rule, Violations},
};

/// Full genre model from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl Genre {
    /// Canonical URL path for this genre.
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

/// Field set for creating or fully updating a genre
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenreFields {
    pub name: String,
}

impl GenreFields {
    pub fn validate(&self) -> AppResult<()> {
        let mut v = Violations::new();
        v.check("name", Some(&self.name), Rule::Required)
            .check("name", Some(&self.name), Rule::LenBetween(3, 100));
        v.into_result()
    }
}

/// Genre plus the books carrying it
#[derive(Debug, Clone, Serialize)]
pub struct GenreDetail {
    pub genre: Genre,
    pub books: Vec<BookSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_path() {
        let genre = Genre {
            id: 3,
            name: "Fantasy".to_string(),
        };
        assert_eq!(genre.url(), "/catalog/genre/3");
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert!(GenreFields { name: "Pop".to_string() }.validate().is_ok());
        assert!(GenreFields { name: "x".repeat(100) }.validate().is_ok());
        assert!(GenreFields { name: "ab".to_string() }.validate().is_err());
        assert!(GenreFields { name: "x".repeat(101) }.validate().is_err());
    }
}
