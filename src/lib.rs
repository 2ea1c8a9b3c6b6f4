//! Museum site: public catalog pages, user and admin accounts, and an admin CMS over
//! exhibitions, artifacts, and exhibition objects.

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use routes::{admin_routes, auth_routes, common_routes, public_routes};
pub use state::AppState;
pub use store::{connect, ensure_tables};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};

/// Largest accepted request body. Every form on the site is a handful of short text fields.
pub const MAX_FORM_BYTES: usize = 64 * 1024;

/// Full application router: site pages, accounts, admin CMS, health, and `/static` assets.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    Router::new()
        .merge(public_routes())
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(common_routes())
        .nest_service("/static", static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_FORM_BYTES)),
        )
        .with_state(state)
}
