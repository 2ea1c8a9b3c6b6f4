//! Builds parameterized DDL, INSERT, SELECT, UPDATE, DELETE from a static table definition.
//! Every table has an `id INTEGER PRIMARY KEY AUTOINCREMENT`; all other columns are TEXT.

use crate::error::AppError;

/// One TEXT column of a table.
#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    /// Human label used in validation messages ("Exhibit name is required.").
    pub label: &'static str,
    pub required: bool,
    pub unique: bool,
}

impl ColumnDef {
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        ColumnDef {
            name,
            label,
            required: true,
            unique: false,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        ColumnDef {
            name,
            label,
            required: false,
            unique: false,
        }
    }

    pub const fn unique(self) -> Self {
        ColumnDef {
            unique: true,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    /// Mutable columns in insert/update order (excludes `id`).
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    pub fn has_column(&self, name: &str) -> bool {
        name == "id" || self.columns.iter().any(|c| c.name == name)
    }
}

/// Quote identifier for SQLite (safe: only from static definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(table: &TableDef) -> String {
    std::iter::once("id")
        .chain(table.columns.iter().map(|c| c.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn create_table(table: &TableDef) -> String {
    let mut defs = vec![format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", quoted("id"))];
    for c in table.columns {
        let mut def = format!("{} TEXT", quoted(c.name));
        if c.required {
            def.push_str(" NOT NULL");
        }
        if c.unique {
            def.push_str(" UNIQUE");
        }
        defs.push(def);
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        quoted(table.name),
        defs.join(",\n    ")
    )
}

/// Full-table scan ordered by id; no pagination.
pub fn select_all(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(table),
        quoted(table.name),
        quoted("id")
    )
}

/// SELECT by primary key. Caller binds the id as sole param.
pub fn select_by_id(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?1",
        column_list(table),
        quoted(table.name),
        quoted("id")
    )
}

/// SELECT rows where one column equals a bound value (exact, case-sensitive).
pub fn select_where(table: &TableDef, column: &str) -> Result<String, AppError> {
    if !table.has_column(column) {
        return Err(AppError::BadRequest(format!(
            "unknown column {} on {}",
            column, table.name
        )));
    }
    Ok(format!(
        "SELECT {} FROM {} WHERE {} = ?1 ORDER BY {}",
        column_list(table),
        quoted(table.name),
        quoted(column),
        quoted("id")
    ))
}

/// SELECT one column of the rows matching `key_column = ?1`.
pub fn select_column_where(table: &TableDef, column: &str, key_column: &str) -> Result<String, AppError> {
    for c in [column, key_column] {
        if !table.has_column(c) {
            return Err(AppError::BadRequest(format!("unknown column {} on {}", c, table.name)));
        }
    }
    Ok(format!(
        "SELECT {} FROM {} WHERE {} = ?1",
        quoted(column),
        quoted(table.name),
        quoted(key_column)
    ))
}

/// INSERT of every mutable column, in definition order.
pub fn insert(table: &TableDef) -> String {
    let cols: Vec<String> = table.columns.iter().map(|c| quoted(c.name)).collect();
    let placeholders: Vec<String> = (1..=table.columns.len()).map(|n| format!("?{}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", ")
    )
}

/// Full-row UPDATE; the id is the last parameter.
pub fn update(table: &TableDef) -> String {
    let sets: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ?{}", quoted(c.name), i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        quoted(table.name),
        sets.join(", "),
        quoted("id"),
        table.columns.len() + 1
    )
}

pub fn delete(table: &TableDef) -> String {
    format!("DELETE FROM {} WHERE {} = ?1", quoted(table.name), quoted("id"))
}
