//! Admin routes: dashboard plus the uniform CRUD routes of each entity type.

use crate::handlers::admin::dashboard;
use crate::handlers::entity::{create, delete, edit, section, update};
use crate::models::{Artifact, Exhibition, ExhibitionObject, Record};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

/// `/section_<x>` (GET list, POST create), `/edit_<x>/:id`, `/update_<x>/:id`, `/delete_<x>/:id`.
pub fn record_routes<R: Record>() -> Router<AppState> {
    Router::new()
        .route(&R::section_path(), get(section::<R>).post(create::<R>))
        .route(&format!("/edit_{}/:id", R::SINGULAR), get(edit::<R>))
        .route(&format!("/update_{}/:id", R::SINGULAR), post(update::<R>))
        .route(&format!("/delete_{}/:id", R::SINGULAR), post(delete::<R>))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/adminDashboard", get(dashboard))
        .merge(record_routes::<Exhibition>())
        .merge(record_routes::<ExhibitionObject>())
        .merge(record_routes::<Artifact>())
}
