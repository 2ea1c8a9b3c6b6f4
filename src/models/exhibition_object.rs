//! Objects shown in featured exhibitions, linked by creator or culture.

use crate::models::Record;
use crate::sql::{ColumnDef, TableDef};
use serde::Serialize;
use sqlx::FromRow;

pub const EXHIBITION_OBJECTS: TableDef = TableDef {
    name: "exhibition_objects",
    columns: &[
        ColumnDef::required("title", "Title"),
        ColumnDef::required("creator", "Creator"),
        ColumnDef::optional("culture", "Culture"),
        ColumnDef::required("date", "Date"),
        ColumnDef::optional("medium", "Medium"),
        ColumnDef::optional("dimensions", "Dimensions"),
        ColumnDef::required("credit", "Credit"),
        ColumnDef::optional("description", "Description"),
        ColumnDef::required("image_filename", "Image filename"),
    ],
};

/// An object shown in a featured exhibition. `creator` or `culture` carries the link to the
/// exhibition (see `catalog::ObjectLink`); there is no foreign key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct ExhibitionObject {
    pub id: i64,
    pub title: String,
    pub creator: String,
    pub culture: Option<String>,
    pub date: String,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub credit: String,
    pub description: Option<String>,
    pub image_filename: String,
}

impl Record for ExhibitionObject {
    const TABLE: TableDef = EXHIBITION_OBJECTS;
    const SECTION: &'static str = "exhibition_objects";
    const SINGULAR: &'static str = "exhibition_object";
    const SECTION_VIEW: &'static str = "section_exhibition_objects";
    const EDIT_VIEW: &'static str = "edit_exhibition_object";
}
