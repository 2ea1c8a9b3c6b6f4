//! Shared application state for all routes.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Signs and verifies session cookies.
    pub key: Key,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Derive the cookie key from the configured secret (at least 32 bytes, checked by config validation).
    pub fn new(pool: SqlitePool, secret: &str, static_dir: PathBuf) -> Self {
        AppState {
            pool,
            key: Key::derive_from(secret.as_bytes()),
            static_dir,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}
