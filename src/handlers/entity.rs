//! Admin CRUD handlers shared by every entity type: list+create, edit, update, delete.
//! Every handler takes [`AdminSession`] first, so the gate runs before any read or write.

use crate::error::AppError;
use crate::extractors::AdminSession;
use crate::models::Record;
use crate::response::{render, render_with_status, SectionPage};
use crate::service::{CrudService, FieldErrors, FormValidator};
use crate::sql::{FormData, RowValues};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use sqlx::SqlitePool;

/// All rows, or none when the store cannot be read.
async fn rows_or_empty<R: Record>(pool: &SqlitePool) -> Vec<R> {
    CrudService::list::<R>(pool).await.unwrap_or_else(|e| {
        tracing::error!(table = R::TABLE.name, error = %e, "list failed");
        Vec::new()
    })
}

fn back_to_section<R: Record>() -> Redirect {
    Redirect::to(&R::section_path())
}

pub async fn section<R: Record>(_admin: AdminSession, State(state): State<AppState>) -> impl IntoResponse {
    let rows = rows_or_empty::<R>(&state.pool).await;
    render(
        R::SECTION_VIEW,
        SectionPage {
            rows,
            errors: FieldErrors::new(),
        },
    )
}

/// Insert one row from the form and redirect back to the list. A missing required field
/// re-renders the list with errors; nothing is written.
pub async fn create<R: Record>(
    _admin: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<FormData>,
) -> Response {
    if let Err(errors) = FormValidator::new(&form).columns(&R::TABLE).finish() {
        let rows = rows_or_empty::<R>(&state.pool).await;
        return render_with_status(StatusCode::UNPROCESSABLE_ENTITY, R::SECTION_VIEW, SectionPage { rows, errors })
            .into_response();
    }
    let values = RowValues::from_form(&R::TABLE, &form);
    match CrudService::create::<R>(&state.pool, &values).await {
        Ok(id) => tracing::info!(table = R::TABLE.name, id, "row created"),
        Err(e) => tracing::error!(table = R::TABLE.name, error = %e, "create failed"),
    }
    back_to_section::<R>().into_response()
}

/// Edit form for one row; an unknown id silently returns to the list.
pub async fn edit<R: Record>(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match CrudService::read::<R>(&state.pool, id).await {
        Ok(Some(row)) => render(R::EDIT_VIEW, row).into_response(),
        Ok(None) => back_to_section::<R>().into_response(),
        Err(e) => {
            tracing::error!(table = R::TABLE.name, id, error = %e, "read failed");
            back_to_section::<R>().into_response()
        }
    }
}

/// Full-row replace. Every column must be submitted; a missing one fails the request with 400.
pub async fn update<R: Record>(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<FormData>,
) -> Result<Redirect, AppError> {
    let values = RowValues::from_form_strict(&R::TABLE, &form)?;
    match CrudService::update::<R>(&state.pool, id, &values).await {
        Ok(true) => tracing::info!(table = R::TABLE.name, id, "row updated"),
        Ok(false) => tracing::debug!(table = R::TABLE.name, id, "update matched no row"),
        Err(e) => tracing::error!(table = R::TABLE.name, id, error = %e, "update failed"),
    }
    Ok(back_to_section::<R>())
}

/// Idempotent: deleting an absent id still redirects to the list.
pub async fn delete<R: Record>(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Redirect {
    match CrudService::delete::<R>(&state.pool, id).await {
        Ok(true) => tracing::info!(table = R::TABLE.name, id, "row deleted"),
        Ok(false) => tracing::debug!(table = R::TABLE.name, id, "delete matched no row"),
        Err(e) => tracing::error!(table = R::TABLE.name, id, error = %e, "delete failed"),
    }
    back_to_section::<R>()
}
