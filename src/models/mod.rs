//! Row types and their table definitions.

pub mod account;
pub mod artifact;
pub mod dashboard;
pub mod exhibition;
pub mod exhibition_object;

pub use account::{ADMINS, USERS};
pub use artifact::Artifact;
pub use dashboard::{DashboardCounts, DashboardSummary, RecentExhibition};
pub use exhibition::Exhibition;
pub use exhibition_object::ExhibitionObject;

use crate::sql::TableDef;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// An admin-managed entity type with uniform list/create, edit, update and delete semantics.
pub trait Record: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Sync + Unpin + 'static {
    const TABLE: TableDef;
    /// Path segment shared by `/section_<x>` style routes, e.g. `exhibition_objects`.
    const SECTION: &'static str;
    /// Singular segment for `/edit_<x>/{id}`, `/update_<x>/{id}`, `/delete_<x>/{id}`.
    const SINGULAR: &'static str;
    /// View rendering the list+create page.
    const SECTION_VIEW: &'static str;
    /// View rendering the edit form.
    const EDIT_VIEW: &'static str;

    fn section_path() -> String {
        format!("/section_{}", Self::SECTION)
    }
}
