//! Exhibitions and events; an event is an exhibition whose category is exactly "Event".

use crate::models::Record;
use crate::sql::{ColumnDef, TableDef};
use serde::Serialize;
use sqlx::FromRow;

pub const EXHIBITIONS: TableDef = TableDef {
    name: "exhibitions",
    columns: &[
        ColumnDef::required("exhibit_name", "Exhibit name"),
        ColumnDef::required("location", "Location"),
        ColumnDef::required("category", "Category"),
        ColumnDef::required("image_filename", "Image filename"),
        ColumnDef::required("start_date", "Start date"),
        ColumnDef::required("end_date", "End date"),
        ColumnDef::required("opening_time", "Opening time"),
        ColumnDef::required("closing_time", "Closing time"),
        ColumnDef::optional("description", "Description"),
    ],
};

/// Exhibitions and events share this table; see `catalog::ExhibitionKind`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Exhibition {
    pub id: i64,
    pub exhibit_name: String,
    pub location: String,
    pub category: String,
    pub image_filename: String,
    pub start_date: String,
    pub end_date: String,
    pub opening_time: String,
    pub closing_time: String,
    pub description: Option<String>,
}

impl Record for Exhibition {
    const TABLE: TableDef = EXHIBITIONS;
    const SECTION: &'static str = "exhibition";
    const SINGULAR: &'static str = "exhibition";
    const SECTION_VIEW: &'static str = "section_exhibition";
    const EDIT_VIEW: &'static str = "edit_exhibition";
}
