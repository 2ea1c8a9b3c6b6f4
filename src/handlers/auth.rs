//! Registration, login and logout for site users and admins.
//! The two principal kinds share one flow but never share a session.

use crate::credentials::{hash_password, issue_session, revoke_session, Principal, INVALID_CREDENTIALS};
use crate::error::AppError;
use crate::models::account::{
    admin_row, user_row, validate_admin_registration, validate_login, validate_user_registration,
    EMAIL_FIELD,
};
use crate::response::{form_errors, render, FormPage};
use crate::service::{AccountService, FieldErrors};
use crate::sql::{FormData, RowValues};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::instrument;

pub const DUPLICATE_EMAIL: &str = "Email already exists.";

/// Views and redirect targets for one principal kind.
struct AuthFlow {
    principal: Principal,
    register_view: &'static str,
    login_view: &'static str,
    after_register: &'static str,
    after_login: &'static str,
    validate_registration: fn(&FormData) -> Result<(), FieldErrors>,
    build_row: fn(&FormData, String) -> RowValues,
}

const USER_FLOW: AuthFlow = AuthFlow {
    principal: Principal::User,
    register_view: "register",
    login_view: "login",
    after_register: "/login",
    after_login: "/",
    validate_registration: validate_user_registration,
    build_row: user_row,
};

const ADMIN_FLOW: AuthFlow = AuthFlow {
    principal: Principal::Admin,
    register_view: "adminRegister",
    login_view: "adminLogin",
    after_register: "/adminLogin",
    after_login: "/adminDashboard",
    validate_registration: validate_admin_registration,
    build_row: admin_row,
};

const AFTER_LOGOUT: &str = "/";

async fn register_with(flow: &AuthFlow, state: &AppState, form: &FormData) -> Result<Response, AppError> {
    if let Err(errors) = (flow.validate_registration)(form) {
        return Ok(form_errors(StatusCode::UNPROCESSABLE_ENTITY, flow.register_view, errors).into_response());
    }
    let password = form.get("password").map(String::as_str).unwrap_or_default();
    let digest = hash_password(password)?;
    let row = (flow.build_row)(form, digest);
    match AccountService::register(&state.pool, flow.principal, &row).await {
        Ok(id) => {
            tracing::info!(principal = ?flow.principal, id, "account registered");
            Ok(Redirect::to(flow.after_register).into_response())
        }
        Err(e) if e.is_unique_violation() => {
            tracing::debug!(principal = ?flow.principal, "registration rejected: duplicate email");
            let errors = FieldErrors::from([("database".to_string(), DUPLICATE_EMAIL.to_string())]);
            Ok(form_errors(StatusCode::CONFLICT, flow.register_view, errors).into_response())
        }
        Err(e) => Err(e),
    }
}

async fn login_with(
    flow: &AuthFlow,
    state: &AppState,
    jar: SignedCookieJar,
    form: &FormData,
) -> Result<Response, AppError> {
    if let Err(errors) = validate_login(form) {
        return Ok(form_errors(StatusCode::UNPROCESSABLE_ENTITY, flow.login_view, errors).into_response());
    }
    let email = form.get(EMAIL_FIELD).map(String::as_str).unwrap_or_default();
    let password = form.get("password").map(String::as_str).unwrap_or_default();

    if AccountService::authenticate(&state.pool, flow.principal, email, password).await? {
        tracing::info!(principal = ?flow.principal, "login succeeded");
        let jar = issue_session(jar, flow.principal, email);
        return Ok((jar, Redirect::to(flow.after_login)).into_response());
    }
    tracing::warn!(principal = ?flow.principal, "login failed");
    let errors = FieldErrors::from([("login".to_string(), INVALID_CREDENTIALS.to_string())]);
    Ok(form_errors(StatusCode::UNAUTHORIZED, flow.login_view, errors).into_response())
}

pub async fn register_page() -> impl IntoResponse {
    render(USER_FLOW.register_view, FormPage::default())
}

#[instrument(skip_all)]
pub async fn register(State(state): State<AppState>, Form(form): Form<FormData>) -> Result<Response, AppError> {
    register_with(&USER_FLOW, &state, &form).await
}

pub async fn login_page() -> impl IntoResponse {
    render(USER_FLOW.login_view, FormPage::default())
}

#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<FormData>,
) -> Result<Response, AppError> {
    login_with(&USER_FLOW, &state, jar, &form).await
}

/// Clears only the user session; an admin session in the same browser survives.
pub async fn logout(jar: SignedCookieJar) -> impl IntoResponse {
    (revoke_session(jar, Principal::User), Redirect::to(AFTER_LOGOUT))
}

pub async fn admin_register_page() -> impl IntoResponse {
    render(ADMIN_FLOW.register_view, FormPage::default())
}

#[instrument(skip_all)]
pub async fn admin_register(State(state): State<AppState>, Form(form): Form<FormData>) -> Result<Response, AppError> {
    register_with(&ADMIN_FLOW, &state, &form).await
}

pub async fn admin_login_page() -> impl IntoResponse {
    render(ADMIN_FLOW.login_view, FormPage::default())
}

#[instrument(skip_all)]
pub async fn admin_login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<FormData>,
) -> Result<Response, AppError> {
    login_with(&ADMIN_FLOW, &state, jar, &form).await
}

pub async fn admin_logout(jar: SignedCookieJar) -> impl IntoResponse {
    (revoke_session(jar, Principal::Admin), Redirect::to(AFTER_LOGOUT))
}
