//! Genres service

use crate::{
    error::AppResult,
    models::genre::{Genre, GenreDetail, GenreFields},
    repository::Repository,
};

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List genres ordered by name
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    /// Get a genre with the books carrying it
    pub async fn detail(&self, id: i64) -> AppResult<GenreDetail> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.get_by_id(id),
            self.repository.books.for_genre(id),
        )?;
        Ok(GenreDetail { genre, books })
    }

    /// Validate and create a genre. A case-insensitive name match
    /// short-circuits to the existing record instead of erroring; the
    /// check happens only here, never on update.
    pub async fn create(&self, data: &GenreFields) -> AppResult<Genre> {
        data.validate()?;

        if let Some(existing) = self.repository.genres.find_by_name_ci(&data.name).await? {
            tracing::debug!(
                id = existing.id,
                "Genre {:?} already exists, returning existing record",
                existing.name
            );
            return Ok(existing);
        }

        let genre = self.repository.genres.create(data).await?;
        tracing::info!(id = genre.id, "Created genre {:?}", genre.name);
        Ok(genre)
    }

    /// Validate and overwrite a genre's name
    pub async fn update(&self, id: i64, data: &GenreFields) -> AppResult<Genre> {
        data.validate()?;
        self.repository.genres.update(id, data).await
    }

    /// Delete a genre; refused while any book still carries it
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.repository.genres.delete(id).await;
        match &result {
            Ok(()) => tracing::info!(id, "Deleted genre"),
            Err(crate::AppError::Conflict { dependents, .. }) => {
                tracing::info!(id, blocking = dependents.len(), "Genre delete refused");
            }
            Err(_) => {}
        }
        result
    }
}
