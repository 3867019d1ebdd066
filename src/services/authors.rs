//! Authors service

use crate::{
    error::AppResult,
    models::author::{Author, AuthorDetail, AuthorFields},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List authors ordered by family name
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// Get an author with their books (ordered by title)
    pub async fn detail(&self, id: i64) -> AppResult<AuthorDetail> {
        let (author, books) = tokio::try_join!(
            self.repository.authors.get_by_id(id),
            self.repository.authors.books(id),
        )?;
        Ok(AuthorDetail { author, books })
    }

    /// Validate and create an author
    pub async fn create(&self, data: &AuthorFields) -> AppResult<Author> {
        data.validate()?;
        let author = self.repository.authors.create(data).await?;
        tracing::info!(id = author.id, "Created author {}", author.name());
        Ok(author)
    }

    /// Validate and overwrite all fields of an author
    pub async fn update(&self, id: i64, data: &AuthorFields) -> AppResult<Author> {
        data.validate()?;
        self.repository.authors.update(id, data).await
    }

    /// Delete an author; refused while any of their books exist
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.repository.authors.delete(id).await;
        match &result {
            Ok(()) => tracing::info!(id, "Deleted author"),
            Err(crate::AppError::Conflict { dependents, .. }) => {
                tracing::info!(id, blocking = dependents.len(), "Author delete refused");
            }
            Err(_) => {}
        }
        result
    }
}
