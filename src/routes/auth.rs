//! User and admin authentication routes.

use crate::handlers::auth::{
    admin_login, admin_login_page, admin_logout, admin_register, admin_register_page, login, login_page,
    logout, register, register_page,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout).post(logout))
        .route("/adminRegister", get(admin_register_page).post(admin_register))
        .route("/adminLogin", get(admin_login_page).post(admin_login))
        .route("/adminLogout", get(admin_logout))
}
