//! Account registration and credential checks for both principal kinds.

use crate::credentials::{burn_verify, verify_password, Principal};
use crate::error::AppError;
use crate::service::CrudService;
use crate::sql::{select_column_where, RowValues};
use sqlx::SqlitePool;

pub struct AccountService;

impl AccountService {
    /// Insert a new account row. A duplicate email surfaces as a unique violation.
    pub async fn register(
        pool: &SqlitePool,
        principal: Principal,
        row: &RowValues,
    ) -> Result<i64, AppError> {
        CrudService::insert_into(pool, principal.table(), row).await
    }

    /// True only when the email exists in this principal's table and the password verifies.
    pub async fn authenticate(
        pool: &SqlitePool,
        principal: Principal,
        email: &str,
        password: &str,
    ) -> Result<bool, AppError> {
        let sql = select_column_where(principal.table(), "password", "email")?;
        tracing::debug!(sql = %sql, "query");
        let digest: Option<String> = sqlx::query_scalar(&sql)
            .bind(email)
            .fetch_optional(pool)
            .await?;
        match digest {
            Some(d) => Ok(verify_password(password, &d)),
            None => {
                burn_verify(password);
                Ok(false)
            }
        }
    }
}
