//! BookInstances service

use chrono::Utc;

use crate::{
    error::AppResult,
    models::book_instance::{
        BookInstance, BookInstanceDetail, BookInstanceFields, BookInstanceListItem,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookInstancesService {
    repository: Repository,
}

impl BookInstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List instances with book titles, ordered by id
    pub async fn list(&self) -> AppResult<Vec<BookInstanceListItem>> {
        self.repository.book_instances.list().await
    }

    /// Get an instance with its book
    pub async fn detail(&self, id: i64) -> AppResult<BookInstanceDetail> {
        let instance = self.repository.book_instances.get_by_id(id).await?;
        let book = self.repository.books.get_by_id(instance.book_id).await?;
        Ok(BookInstanceDetail { instance, book })
    }

    /// Validate and create an instance. Status defaults to Maintenance,
    /// the due date to today.
    pub async fn create(&self, data: &BookInstanceFields) -> AppResult<BookInstance> {
        data.validate()?;
        let status = data.status.unwrap_or_default();
        let due_back = data.due_back.or_else(|| Some(Utc::now().date_naive()));
        let instance = self
            .repository
            .book_instances
            .create(&data.imprint, status, due_back, data.book_id)
            .await?;
        tracing::info!(id = instance.id, "Created book instance {:?}", instance.imprint);
        Ok(instance)
    }

    /// Validate and overwrite all fields of an instance. An absent status
    /// still falls back to Maintenance, but an absent due date overwrites
    /// to "none" rather than defaulting to today.
    pub async fn update(&self, id: i64, data: &BookInstanceFields) -> AppResult<BookInstance> {
        data.validate()?;
        let status = data.status.unwrap_or_default();
        self.repository
            .book_instances
            .update(id, &data.imprint, status, data.due_back, data.book_id)
            .await
    }

    /// Delete an instance. Instances have no dependents; always allowed.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.book_instances.delete(id).await?;
        tracing::info!(id, "Deleted book instance");
        Ok(())
    }
}
