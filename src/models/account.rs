//! Registered principals: site users and admins live in separate tables with separate emails.

use crate::service::{FieldErrors, FormValidator};
use crate::sql::{ColumnDef, FormData, RowValues, TableDef};

pub const USERS: TableDef = TableDef {
    name: "users",
    columns: &[
        ColumnDef::required("first_name", "First name"),
        ColumnDef::required("last_name", "Last name"),
        ColumnDef::required("phone_number", "Phone number"),
        ColumnDef::required("email", "Email").unique(),
        ColumnDef::required("password", "Password"),
        ColumnDef::required("address_line1", "Address Line 1"),
        ColumnDef::optional("address_line2", "Address Line 2"),
        ColumnDef::required("city", "City"),
        ColumnDef::required("zip_code", "Zip code"),
    ],
};

pub const ADMINS: TableDef = TableDef {
    name: "admins",
    columns: &[
        ColumnDef::required("first_name", "First name"),
        ColumnDef::required("last_name", "Last name"),
        ColumnDef::required("email", "Email").unique(),
        ColumnDef::required("password", "Password"),
    ],
};

/// User registration posts the address as `email_id`; every other form uses `email`.
pub const USER_REGISTER_EMAIL_FIELD: &str = "email_id";
pub const EMAIL_FIELD: &str = "email";

pub fn validate_user_registration(form: &FormData) -> Result<(), FieldErrors> {
    FormValidator::new(form)
        .required("first_name", "First name is required.")
        .required("last_name", "Last name is required.")
        .required("phone_number", "Phone number is required.")
        .email(USER_REGISTER_EMAIL_FIELD)
        .password("password")
        .confirmation("confirm_password", "password")
        .required("address_line1", "Address Line 1 is required.")
        .required("city", "City is required.")
        .required("zip_code", "Zip code is required.")
        .finish()
}

pub fn validate_admin_registration(form: &FormData) -> Result<(), FieldErrors> {
    FormValidator::new(form)
        .required("first_name", "First name is required.")
        .required("last_name", "Last name is required.")
        .email(EMAIL_FIELD)
        .password("password")
        .confirmation("confirm_password", "password")
        .finish()
}

pub fn validate_login(form: &FormData) -> Result<(), FieldErrors> {
    FormValidator::new(form)
        .email(EMAIL_FIELD)
        .password_present("password")
        .finish()
}

fn field(form: &FormData, name: &str) -> Option<String> {
    form.get(name).cloned()
}

/// Row for `users`, in column order, with the password replaced by its digest.
pub fn user_row(form: &FormData, password_hash: String) -> RowValues {
    RowValues::new(vec![
        field(form, "first_name"),
        field(form, "last_name"),
        field(form, "phone_number"),
        field(form, USER_REGISTER_EMAIL_FIELD),
        Some(password_hash),
        field(form, "address_line1"),
        field(form, "address_line2"),
        field(form, "city"),
        field(form, "zip_code"),
    ])
}

/// Row for `admins`, in column order, with the password replaced by its digest.
pub fn admin_row(form: &FormData, password_hash: String) -> RowValues {
    RowValues::new(vec![
        field(form, "first_name"),
        field(form, "last_name"),
        field(form, EMAIL_FIELD),
        Some(password_hash),
    ])
}
