//! Public pages: static pages, events, artifact categories, featured exhibitions and their objects.

use crate::catalog::{ArtifactCategory, FEATURED_EXHIBITIONS};
use crate::handlers::public::{
    about, artifact_category, artifacts, events, exhibition, featured_exhibition, featured_objects, home, visit,
};
use crate::state::AppState;
use axum::{extract::State, routing::get, Router};

pub fn public_routes() -> Router<AppState> {
    let mut router = Router::new()
        .route("/", get(home))
        .route("/visit", get(visit))
        .route("/exhibition", get(exhibition))
        .route("/events", get(events))
        .route("/artifacts", get(artifacts))
        .route("/about", get(about));

    for category in ArtifactCategory::ALL {
        router = router.route(
            &category.path(),
            get(move |State(state): State<AppState>| artifact_category(state, category)),
        );
    }

    for featured in FEATURED_EXHIBITIONS {
        router = router.route(
            &featured.path(),
            get(move |State(state): State<AppState>| featured_exhibition(state, featured)),
        );
        if let Some(path) = featured.objects_path() {
            router = router.route(
                &path,
                get(move |State(state): State<AppState>| featured_objects(state, featured)),
            );
        }
    }
    router
}
