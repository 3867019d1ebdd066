//! Genres repository

use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult, BlockingDependent},
    models::{
        book::BookSummary,
        genre::{Genre, GenreFields},
    },
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: SqlitePool,
}

impl GenresRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all genres ordered by name
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>("SELECT * FROM genres ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get genre by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    /// Case-insensitive lookup by name, used for create-time dedup
    pub async fn find_by_name_ci(&self, name: &str) -> AppResult<Option<Genre>> {
        let row = sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE LOWER(name) = LOWER(?)")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a new genre
    pub async fn create(&self, data: &GenreFields) -> AppResult<Genre> {
        let row = sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES (?) RETURNING *")
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Overwrite a genre's name. Uniqueness is not re-checked here.
    pub async fn update(&self, id: i64, data: &GenreFields) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("UPDATE genres SET name = ? WHERE id = ? RETURNING *")
            .bind(&data.name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    /// Delete a genre. Refused while any book still carries it; the guard
    /// check and the delete share one transaction.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM genres WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("Genre {} not found", id)));
        }

        let blocking = sqlx::query_as::<_, BookSummary>(
            r#"
            SELECT b.id, b.title, b.summary
            FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = ?
            ORDER BY b.title ASC
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        if !blocking.is_empty() {
            return Err(AppError::conflict(
                format!("Genre {} is carried by {} book(s)", id, blocking.len()),
                blocking
                    .into_iter()
                    .map(|b| BlockingDependent {
                        id: b.id,
                        label: b.title,
                    })
                    .collect(),
            ));
        }

        sqlx::query("DELETE FROM genres WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
