//! Row values taken from a submitted form, aligned with a table's column order.

use crate::error::AppError;
use crate::sql::TableDef;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use std::collections::HashMap;

/// Submitted form fields as name → raw string value.
pub type FormData = HashMap<String, String>;

/// One value per mutable column, in definition order. `None` binds SQL NULL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowValues {
    values: Vec<Option<String>>,
}

impl RowValues {
    pub fn new(values: Vec<Option<String>>) -> Self {
        RowValues { values }
    }

    /// Values for an insert. Absent fields become NULL; present values are kept as submitted.
    /// Required-field presence is checked beforehand by the validation layer.
    pub fn from_form(table: &TableDef, form: &FormData) -> Self {
        let values = table
            .columns
            .iter()
            .map(|c| form.get(c.name).cloned())
            .collect();
        RowValues { values }
    }

    /// Values for a full-row replace. Every column must be present in the form.
    pub fn from_form_strict(table: &TableDef, form: &FormData) -> Result<Self, AppError> {
        let mut values = Vec::with_capacity(table.columns.len());
        for c in table.columns {
            let v = form
                .get(c.name)
                .ok_or_else(|| AppError::BadRequest(format!("missing field '{}'", c.name)))?;
            values.push(Some(v.clone()));
        }
        Ok(RowValues { values })
    }

    /// Bind every value, in order, onto a query built by the SQL builder.
    pub fn bind_to<'q>(
        &'q self,
        mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        for v in &self.values {
            query = query.bind(v.as_deref());
        }
        query
    }
}
