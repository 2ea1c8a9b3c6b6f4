//! Public read-only pages. No session is required; store failures render empty data.

use crate::catalog::{ArtifactCategory, ExhibitionKind, FeaturedExhibition};
use crate::error::AppError;
use crate::extractors::SessionContext;
use crate::models::{Artifact, Exhibition, ExhibitionObject};
use crate::response::render;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use serde::Serialize;

fn or_empty<T>(result: Result<Vec<T>, AppError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, "fetching {} failed", what);
        Vec::new()
    })
}

#[derive(Serialize)]
pub struct StaticPage {
    pub session: SessionContext,
}

fn static_page(view: &'static str, session: SessionContext) -> impl IntoResponse {
    render(view, StaticPage { session })
}

pub async fn home(session: SessionContext) -> impl IntoResponse {
    static_page("index", session)
}

pub async fn visit(session: SessionContext) -> impl IntoResponse {
    static_page("visit", session)
}

pub async fn exhibition(session: SessionContext) -> impl IntoResponse {
    static_page("exhibition", session)
}

pub async fn artifacts(session: SessionContext) -> impl IntoResponse {
    static_page("artifacts", session)
}

pub async fn about(session: SessionContext) -> impl IntoResponse {
    static_page("about", session)
}

#[derive(Serialize)]
pub struct EventsPage {
    pub events: Vec<Exhibition>,
}

/// Exhibitions whose category is exactly "Event", the same literal the dashboard counts.
pub async fn events(State(state): State<AppState>) -> impl IntoResponse {
    let events = or_empty(
        CrudService::list_where::<Exhibition>(&state.pool, "category", ExhibitionKind::EVENT_CATEGORY).await,
        "events",
    );
    render("events", EventsPage { events })
}

#[derive(Serialize)]
pub struct CategoryPage {
    pub category: &'static str,
    pub artifacts: Vec<Artifact>,
}

pub async fn artifact_category(state: AppState, category: ArtifactCategory) -> impl IntoResponse {
    let artifacts = or_empty(
        CrudService::list_where::<Artifact>(&state.pool, "category", category.label()).await,
        category.label(),
    );
    render(
        category.slug(),
        CategoryPage {
            category: category.label(),
            artifacts,
        },
    )
}

#[derive(Serialize)]
pub struct FeaturedPage {
    pub title: &'static str,
    pub exhibition: Option<Exhibition>,
    pub kind: Option<ExhibitionKind>,
    /// Path of the linked objects page, when the exhibition has one.
    pub objects_path: Option<String>,
}

pub async fn featured_exhibition(state: AppState, featured: &'static FeaturedExhibition) -> impl IntoResponse {
    let exhibition = CrudService::first_where::<Exhibition>(&state.pool, "exhibit_name", featured.title)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, slug = featured.slug, "fetching exhibition failed");
            None
        });
    let kind = exhibition.as_ref().map(|e| ExhibitionKind::classify(&e.category));
    render(
        featured.slug,
        FeaturedPage {
            title: featured.title,
            exhibition,
            kind,
            objects_path: featured.objects_path(),
        },
    )
}

#[derive(Serialize)]
pub struct ObjectsPage {
    pub exhibition: &'static str,
    pub title: &'static str,
    pub objects: Vec<ExhibitionObject>,
}

/// Objects linked to a featured exhibition through its [`crate::catalog::ObjectLink`].
/// An exhibition without a link lists nothing.
pub async fn featured_objects(state: AppState, featured: &'static FeaturedExhibition) -> impl IntoResponse {
    let objects = match featured.objects {
        Some(link) => or_empty(
            CrudService::list_where::<ExhibitionObject>(&state.pool, link.column(), link.value()).await,
            "exhibition objects",
        ),
        None => Vec::new(),
    };
    render(
        "exhibit_objects",
        ObjectsPage {
            exhibition: featured.slug,
            title: featured.title,
            objects,
        },
    )
}
