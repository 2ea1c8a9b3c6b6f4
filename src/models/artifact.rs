//! Museum artifacts, listed publicly by exact category label.

use crate::models::Record;
use crate::sql::{ColumnDef, TableDef};
use serde::Serialize;
use sqlx::FromRow;

pub const ARTIFACTS: TableDef = TableDef {
    name: "artifacts",
    columns: &[
        ColumnDef::required("item_name", "Item name"),
        ColumnDef::required("category", "Category"),
        ColumnDef::required("origin", "Origin"),
        ColumnDef::required("historical_period", "Historical period"),
        ColumnDef::required("location", "Location"),
        ColumnDef::required("image_filename", "Image filename"),
        ColumnDef::optional("description", "Description"),
        ColumnDef::optional("category_desc", "Category description"),
    ],
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Artifact {
    pub id: i64,
    pub item_name: String,
    pub category: String,
    pub origin: String,
    pub historical_period: String,
    pub location: String,
    pub image_filename: String,
    pub description: Option<String>,
    pub category_desc: Option<String>,
}

impl Record for Artifact {
    const TABLE: TableDef = ARTIFACTS;
    const SECTION: &'static str = "artifacts";
    const SINGULAR: &'static str = "artifact";
    const SECTION_VIEW: &'static str = "section_artifacts";
    const EDIT_VIEW: &'static str = "edit_artifact";
}
