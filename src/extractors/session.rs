//! Per-request session context read from the signed session cookies.

use crate::credentials::{session_email, Principal};
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Key, SignedCookieJar};
use serde::Serialize;

/// Where the admin gate sends requests without an admin session.
pub const ADMIN_LOGIN_PATH: &str = "/adminLogin";

/// Both session identities for this request. Cookies that fail signature checks are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub user: Option<String>,
    pub admin: Option<String>,
}

impl SessionContext {
    pub fn from_jar(jar: &SignedCookieJar) -> Self {
        SessionContext {
            user: session_email(jar, Principal::User),
            admin: session_email(jar, Principal::Admin),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state).await?;
        Ok(SessionContext::from_jar(&jar))
    }
}

/// Authorization gate for admin-only routes. Add it as a handler parameter; a request without
/// a live admin session is redirected to the admin login before the handler body runs.
#[derive(Clone, Debug)]
pub struct AdminSession {
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let context = match SessionContext::from_request_parts(parts, state).await {
            Ok(c) => c,
            Err(never) => match never {},
        };
        match context.admin {
            Some(email) => Ok(AdminSession { email }),
            None => {
                tracing::debug!(path = %parts.uri.path(), "admin session missing, redirecting");
                Err(Redirect::to(ADMIN_LOGIN_PATH))
            }
        }
    }
}
