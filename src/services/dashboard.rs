//! Dashboard service: live aggregate counts over the catalog

use serde::Serialize;

use crate::{error::AppResult, repository::Repository};

/// The five aggregate counts backing the summary view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub books: i64,
    pub book_instances: i64,
    pub available_book_instances: i64,
    pub authors: i64,
    pub genres: i64,
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Count everything. The five queries are independent and read-only,
    /// so they run concurrently; nothing is cached, the result always
    /// reflects live state.
    pub async fn count_all(&self) -> AppResult<CatalogCounts> {
        let (books, book_instances, available_book_instances, authors, genres) = tokio::try_join!(
            self.repository.count_books(),
            self.repository.count_book_instances(),
            self.repository.count_available_book_instances(),
            self.repository.count_authors(),
            self.repository.count_genres(),
        )?;

        Ok(CatalogCounts {
            books,
            book_instances,
            available_book_instances,
            authors,
            genres,
        })
    }
}
