//! Load settings from the process environment (after `.env` has been applied by the binary).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::path::PathBuf;

impl Settings {
    /// Read settings from environment variables and validate them.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary lookup (env, map in tests). Unset optional values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("SECRET_KEY").ok_or(ConfigError::Missing("SECRET_KEY"))?;
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind.parse().map_err(|e| ConfigError::Invalid {
            name: "BIND_ADDR",
            reason: format!("{bind}: {e}"),
        })?;
        let static_dir = PathBuf::from(lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into()));

        let settings = Settings {
            database_url,
            secret_key,
            bind_addr,
            static_dir,
        };
        validate(&settings)?;
        Ok(settings)
    }
}
