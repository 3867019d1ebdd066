//! Authors repository

use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult, BlockingDependent},
    models::{
        author::{Author, AuthorFields},
        book::BookSummary,
    },
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: SqlitePool,
}

impl AuthorsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all authors ordered by family name
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY family_name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// List an author's books ordered by title
    pub async fn books(&self, author_id: i64) -> AppResult<Vec<BookSummary>> {
        let rows = sqlx::query_as::<_, BookSummary>(
            "SELECT id, title, summary FROM books WHERE author_id = ? ORDER BY title ASC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new author
    pub async fn create(&self, data: &AuthorFields) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (first_name, family_name, date_of_birth, date_of_death)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.family_name)
        .bind(data.date_of_birth)
        .bind(data.date_of_death)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite all fields of an author. The id is immutable.
    pub async fn update(&self, id: i64, data: &AuthorFields) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors
            SET first_name = ?, family_name = ?, date_of_birth = ?, date_of_death = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.family_name)
        .bind(data.date_of_birth)
        .bind(data.date_of_death)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Delete an author. Refused while any book still references them;
    /// the guard check and the delete share one transaction.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }

        let blocking = sqlx::query_as::<_, BookSummary>(
            "SELECT id, title, summary FROM books WHERE author_id = ? ORDER BY title ASC",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        if !blocking.is_empty() {
            return Err(AppError::conflict(
                format!("Author {} has {} book(s)", id, blocking.len()),
                blocking
                    .into_iter()
                    .map(|b| BlockingDependent {
                        id: b.id,
                        label: b.title,
                    })
                    .collect(),
            ));
        }

        sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
