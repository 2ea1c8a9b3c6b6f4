//! Generic CRUD execution against SQLite for every [`Record`] type.
//! Each write runs as one statement in its own transaction; a dropped transaction rolls back.

use crate::error::AppError;
use crate::models::Record;
use crate::sql::{delete, insert, select_all, select_by_id, select_where, update, RowValues};
use sqlx::SqlitePool;

pub struct CrudService;

impl CrudService {
    /// Every row, ordered by id. No pagination.
    pub async fn list<R: Record>(pool: &SqlitePool) -> Result<Vec<R>, AppError> {
        let sql = select_all(&R::TABLE);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, R>(&sql).fetch_all(pool).await?)
    }

    /// Rows whose `column` equals `value` exactly.
    pub async fn list_where<R: Record>(
        pool: &SqlitePool,
        column: &str,
        value: &str,
    ) -> Result<Vec<R>, AppError> {
        let sql = select_where(&R::TABLE, column)?;
        tracing::debug!(sql = %sql, value = %value, "query");
        Ok(sqlx::query_as::<_, R>(&sql).bind(value).fetch_all(pool).await?)
    }

    /// First row (lowest id) whose `column` equals `value` exactly.
    pub async fn first_where<R: Record>(
        pool: &SqlitePool,
        column: &str,
        value: &str,
    ) -> Result<Option<R>, AppError> {
        let sql = select_where(&R::TABLE, column)?;
        tracing::debug!(sql = %sql, value = %value, "query");
        Ok(sqlx::query_as::<_, R>(&sql).bind(value).fetch_optional(pool).await?)
    }

    pub async fn read<R: Record>(pool: &SqlitePool, id: i64) -> Result<Option<R>, AppError> {
        let sql = select_by_id(&R::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, R>(&sql).bind(id).fetch_optional(pool).await?)
    }

    /// Insert one row. Returns the new id.
    pub async fn create<R: Record>(pool: &SqlitePool, values: &RowValues) -> Result<i64, AppError> {
        Self::insert_into(pool, &R::TABLE, values).await
    }

    /// Insert into an arbitrary table definition; shared with account registration.
    pub async fn insert_into(
        pool: &SqlitePool,
        table: &crate::sql::TableDef,
        values: &RowValues,
    ) -> Result<i64, AppError> {
        let sql = insert(table);
        tracing::debug!(sql = %sql, "execute");
        let mut tx = pool.begin().await?;
        let result = values.bind_to(sqlx::query(&sql)).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every mutable column of one row. Returns false when the id does not exist.
    pub async fn update<R: Record>(
        pool: &SqlitePool,
        id: i64,
        values: &RowValues,
    ) -> Result<bool, AppError> {
        let sql = update(&R::TABLE);
        tracing::debug!(sql = %sql, id, "execute");
        let mut tx = pool.begin().await?;
        let result = values
            .bind_to(sqlx::query(&sql))
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete one row. An absent id is a no-op and returns false.
    pub async fn delete<R: Record>(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = delete(&R::TABLE);
        tracing::debug!(sql = %sql, id, "execute");
        let mut tx = pool.begin().await?;
        let result = sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
