//! Settings validation.

use crate::config::{Settings, MIN_SECRET_LEN};
use crate::error::ConfigError;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.secret_key.len() < MIN_SECRET_LEN {
        return Err(ConfigError::Invalid {
            name: "SECRET_KEY",
            reason: format!("must be at least {} bytes", MIN_SECRET_LEN),
        });
    }
    if !settings.database_url.starts_with("sqlite:") {
        return Err(ConfigError::Invalid {
            name: "DATABASE_URL",
            reason: "only sqlite: URLs are supported".into(),
        });
    }
    Ok(())
}
