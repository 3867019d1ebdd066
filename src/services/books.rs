//! Books service

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookDetail, BookFields, BookListItem},
        book_instance::BookInstance,
    },
    repository::{books::InstanceOrder, Repository},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books with author names, ordered by title
    pub async fn list(&self) -> AppResult<Vec<BookListItem>> {
        self.repository.books.list().await
    }

    /// Get a book with its author, genres, and copies (ordered by id)
    pub async fn detail(&self, id: i64) -> AppResult<BookDetail> {
        let book = self.repository.books.get_by_id(id).await?;
        let (author, genres, instances) = tokio::try_join!(
            self.repository.authors.get_by_id(book.author_id),
            self.repository.books.genres(id),
            self.repository.books.instances(id, InstanceOrder::ById),
        )?;
        Ok(BookDetail {
            book,
            author,
            genres,
            instances,
        })
    }

    /// List a book's copies ordered by imprint (alternate read path)
    pub async fn instances_by_imprint(&self, id: i64) -> AppResult<Vec<BookInstance>> {
        self.repository.books.get_by_id(id).await?;
        self.repository
            .books
            .instances(id, InstanceOrder::ByImprint)
            .await
    }

    /// Validate and create a book, linking the supplied genre set
    pub async fn create(&self, data: &BookFields) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books.create(data).await?;
        tracing::info!(id = book.id, "Created book {:?}", book.title);
        Ok(book)
    }

    /// Validate and overwrite all fields of a book. A supplied genre set
    /// replaces the whole link set; replaying the same set is a no-op.
    pub async fn update(&self, id: i64, data: &BookFields) -> AppResult<Book> {
        data.validate()?;
        self.repository.books.update(id, data).await
    }

    /// Delete a book; refused while any physical copy of it exists
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.repository.books.delete(id).await;
        match &result {
            Ok(()) => tracing::info!(id, "Deleted book"),
            Err(crate::AppError::Conflict { dependents, .. }) => {
                tracing::info!(id, blocking = dependents.len(), "Book delete refused");
            }
            Err(_) => {}
        }
        result
    }
}
