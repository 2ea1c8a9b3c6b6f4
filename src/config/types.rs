//! Runtime settings for the site, read once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://instance/museum.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Minimum length of `SECRET_KEY`; the cookie signing key is derived from it.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct Settings {
    /// SQLite URL, e.g. `sqlite://instance/museum.db`.
    pub database_url: String,
    /// Signs the session cookies. Supplied out-of-band, never defaulted.
    pub secret_key: String,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}
