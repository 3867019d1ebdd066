//! BookInstances repository

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::{
        book_instance::{BookInstance, BookInstanceListItem},
        enums::InstanceStatus,
    },
};

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: SqlitePool,
}

impl BookInstancesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all instances with their book's title, ordered by id
    pub async fn list(&self) -> AppResult<Vec<BookInstanceListItem>> {
        let rows = sqlx::query_as::<_, BookInstanceListItem>(
            r#"
            SELECT i.id, i.imprint, i.status, i.due_back, i.book_id,
                   b.title AS book_title
            FROM book_instances i
            JOIN books b ON b.id = i.book_id
            ORDER BY i.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get instance by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<BookInstance> {
        sqlx::query_as::<_, BookInstance>("SELECT * FROM book_instances WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    /// Insert a new instance with its resolved status and due date
    pub async fn create(
        &self,
        imprint: &str,
        status: InstanceStatus,
        due_back: Option<NaiveDate>,
        book_id: i64,
    ) -> AppResult<BookInstance> {
        let row = sqlx::query_as::<_, BookInstance>(
            r#"
            INSERT INTO book_instances (imprint, status, due_back, book_id)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(imprint)
        .bind(status)
        .bind(due_back)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite all fields of an instance
    pub async fn update(
        &self,
        id: i64,
        imprint: &str,
        status: InstanceStatus,
        due_back: Option<NaiveDate>,
        book_id: i64,
    ) -> AppResult<BookInstance> {
        sqlx::query_as::<_, BookInstance>(
            r#"
            UPDATE book_instances
            SET imprint = ?, status = ?, due_back = ?, book_id = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(imprint)
        .bind(status)
        .bind(due_back)
        .bind(book_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    /// Delete an instance. Instances have no dependents, so no guard.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book instance {} not found",
                id
            )));
        }
        Ok(())
    }
}
