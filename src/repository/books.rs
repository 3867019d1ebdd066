//! Books repository, including the Book<->Genre join relation

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::{
    error::{AppError, AppResult, BlockingDependent},
    models::{
        book::{Book, BookFields, BookListItem, BookSummary},
        book_instance::BookInstance,
        genre::Genre,
    },
};

/// Ordering for a book's instance list. Different read paths want
/// different orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceOrder {
    ById,
    ByImprint,
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: SqlitePool,
}

impl BooksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all books with their author's name fields, ordered by title
    pub async fn list(&self) -> AppResult<Vec<BookListItem>> {
        let rows = sqlx::query_as::<_, BookListItem>(
            r#"
            SELECT b.id, b.title, b.author_id,
                   a.first_name AS author_first_name,
                   a.family_name AS author_family_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            ORDER BY b.title ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// List a book's genres (order irrelevant)
    pub async fn genres(&self, book_id: i64) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM genres g
            JOIN book_genres bg ON bg.genre_id = g.id
            WHERE bg.book_id = ?
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List a book's physical copies in the requested order
    pub async fn instances(&self, book_id: i64, order: InstanceOrder) -> AppResult<Vec<BookInstance>> {
        let sql = match order {
            InstanceOrder::ById => {
                "SELECT * FROM book_instances WHERE book_id = ? ORDER BY id ASC"
            }
            InstanceOrder::ByImprint => {
                "SELECT * FROM book_instances WHERE book_id = ? ORDER BY imprint ASC"
            }
        };
        let rows = sqlx::query_as::<_, BookInstance>(sql)
            .bind(book_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a new book and, when a genre set is supplied, its join rows,
    /// all in one transaction.
    pub async fn create(&self, data: &BookFields) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, summary, isbn, author_id)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.isbn)
        .bind(data.author_id)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(ref genre_ids) = data.genre_ids {
            Self::replace_genres(&mut tx, book.id, genre_ids).await?;
        }

        tx.commit().await?;
        Ok(book)
    }

    /// Overwrite all fields of a book; a supplied genre set replaces the
    /// whole link set, an absent one leaves the links untouched.
    pub async fn update(&self, id: i64, data: &BookFields) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = ?, summary = ?, isbn = ?, author_id = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.isbn)
        .bind(data.author_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        if let Some(ref genre_ids) = data.genre_ids {
            Self::replace_genres(&mut tx, id, genre_ids).await?;
        }

        tx.commit().await?;
        Ok(book)
    }

    /// Replace all genre links for a book: delete existing rows then
    /// insert the new set. An idempotent full replace, no diffing.
    async fn replace_genres(
        tx: &mut Transaction<'_, Sqlite>,
        book_id: i64,
        genre_ids: &[i64],
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = ?")
            .bind(book_id)
            .execute(&mut **tx)
            .await?;

        for genre_id in genre_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO book_genres (book_id, genre_id) VALUES (?, ?)",
            )
            .bind(book_id)
            .bind(genre_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Delete a book. Refused while any physical copy still references
    /// it; the guard check and the delete share one transaction. Join
    /// rows go with the book.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        let blocking = sqlx::query_as::<_, BookInstance>(
            "SELECT * FROM book_instances WHERE book_id = ? ORDER BY id ASC",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        if !blocking.is_empty() {
            return Err(AppError::conflict(
                format!("Book {} has {} copy(ies)", id, blocking.len()),
                blocking
                    .into_iter()
                    .map(|i| BlockingDependent {
                        id: i.id,
                        label: i.imprint,
                    })
                    .collect(),
            ));
        }

        sqlx::query("DELETE FROM book_genres WHERE book_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// List all books carrying a genre, ordered by title
    pub async fn for_genre(&self, genre_id: i64) -> AppResult<Vec<BookSummary>> {
        let rows = sqlx::query_as::<_, BookSummary>(
            r#"
            SELECT b.id, b.title, b.summary
            FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = ?
            ORDER BY b.title ASC
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
