//! Database file creation, connection pool, and table DDL. Tables are created idempotently on startup.

use crate::error::AppError;
use crate::models::exhibition::EXHIBITIONS;
use crate::models::artifact::ARTIFACTS;
use crate::models::exhibition_object::EXHIBITION_OBJECTS;
use crate::models::{ADMINS, USERS};
use crate::sql::{create_table, TableDef};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// The five independent tables. No foreign keys.
pub const TABLES: [&TableDef; 5] = [&USERS, &ADMINS, &EXHIBITIONS, &ARTIFACTS, &EXHIBITION_OBJECTS];

const MAX_CONNECTIONS: u32 = 5;

/// Ensure the parent directory of the database file in `database_url` exists.
/// In-memory URLs are left alone.
pub async fn ensure_database_dir(database_url: &str) -> Result<(), AppError> {
    let Some(path) = database_path(database_url) else {
        return Ok(());
    };
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

fn database_path(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or("");
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(path)
    }
}

/// Bounded pool over the database file, creating the file if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    ensure_database_dir(database_url).await?;
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(opts)
        .await?;
    tracing::info!(database_url = %database_url, "connected to database");
    Ok(pool)
}

/// CREATE TABLE IF NOT EXISTS for every table. Runs in one transaction.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for table in TABLES {
        let ddl = create_table(table);
        tracing::debug!(sql = %ddl, "execute");
        sqlx::query(&ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("database tables ready");
    Ok(())
}
