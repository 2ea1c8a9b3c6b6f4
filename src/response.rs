//! View envelope helpers. Every page renders `{ "view": <template>, "data": <model> }`.

use crate::service::FieldErrors;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct View<T> {
    pub view: &'static str,
    pub data: T,
}

/// Data for a form page: the field errors from the last submission, if any.
#[derive(Serialize, Default)]
pub struct FormPage {
    pub errors: FieldErrors,
}

/// Data for a list+create page: the rows, and the errors from a rejected create.
#[derive(Serialize)]
pub struct SectionPage<T> {
    pub rows: Vec<T>,
    pub errors: FieldErrors,
}

pub fn render<T: Serialize>(view: &'static str, data: T) -> (StatusCode, Json<View<T>>) {
    render_with_status(StatusCode::OK, view, data)
}

pub fn render_with_status<T: Serialize>(
    status: StatusCode,
    view: &'static str,
    data: T,
) -> (StatusCode, Json<View<T>>) {
    (status, Json(View { view, data }))
}

/// Form page re-rendered with validation errors.
pub fn form_errors(
    status: StatusCode,
    view: &'static str,
    errors: FieldErrors,
) -> (StatusCode, Json<View<FormPage>>) {
    render_with_status(status, view, FormPage { errors })
}
