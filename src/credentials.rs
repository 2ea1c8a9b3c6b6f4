//! Password digests and the two independent session namespaces (user, admin).
//!
//! A session is a signed cookie holding the principal's email. The user and admin cookies are
//! separate: issuing or revoking one never touches the other.

use crate::error::AppError;
use crate::models::{ADMINS, USERS};
use crate::sql::TableDef;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use std::sync::LazyLock;

/// Generic login failure; never says whether the email exists.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Principal {
    User,
    Admin,
}

impl Principal {
    pub fn cookie_name(self) -> &'static str {
        match self {
            Principal::User => "user_email",
            Principal::Admin => "admin_email",
        }
    }

    pub fn table(self) -> &'static TableDef {
        match self {
            Principal::User => &USERS,
            Principal::Admin => &ADMINS,
        }
    }
}

/// Argon2id digest with a fresh random salt, in PHC string form.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::PasswordHash(e.to_string()))
}

/// Verify through the same KDF. A malformed digest never verifies.
pub fn verify_password(password: &str, digest: &str) -> bool {
    let parsed = match PasswordHash::new(digest) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "stored password digest is malformed");
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Digest checked when the email is unknown, so both failure paths do the same work.
static DUMMY_DIGEST: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("dummy-password-1!").ok());

pub fn burn_verify(password: &str) {
    if let Some(digest) = DUMMY_DIGEST.as_deref() {
        let _ = verify_password(password, digest);
    }
}

pub fn issue_session(jar: SignedCookieJar, principal: Principal, email: &str) -> SignedCookieJar {
    let cookie = Cookie::build((principal.cookie_name(), email.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

pub fn revoke_session(jar: SignedCookieJar, principal: Principal) -> SignedCookieJar {
    jar.remove(Cookie::build(principal.cookie_name()).path("/"))
}

/// Email held by a valid signed session cookie of this kind.
pub fn session_email(jar: &SignedCookieJar, principal: Principal) -> Option<String> {
    jar.get(principal.cookie_name())
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}
