//! Business logic services
//!
//! Validation and integrity rules live here; the repositories underneath
//! only move rows.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod dashboard;
pub mod genres;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub genres: genres::GenresService,
    pub book_instances: book_instances::BookInstancesService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: authors::AuthorsService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            genres: genres::GenresService::new(repository.clone()),
            book_instances: book_instances::BookInstancesService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
