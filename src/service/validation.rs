//! Form validation: field presence, email shape, password strength, confirmation match.
//! Values are checked as submitted; nothing is trimmed or case-folded.

use crate::sql::{FormData, TableDef};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Field name → human-readable message. Empty when the form is acceptable.
pub type FieldErrors = BTreeMap<String, String>;

pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";
pub const PASSWORD_RULE: &str = "Password must be at least 8 characters long and contain at least one number and one special character.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
static MIN_LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.{8,}$").expect("length pattern compiles"));
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("digit pattern compiles"));
static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*]").expect("symbol pattern compiles"));
static LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]").expect("letter pattern compiles"));

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// At least 8 characters on one line, with a digit, a symbol from [`PASSWORD_SYMBOLS`] and a letter.
pub fn is_strong_password(s: &str) -> bool {
    MIN_LENGTH_RE.is_match(s) && DIGIT_RE.is_match(s) && SYMBOL_RE.is_match(s) && LETTER_RE.is_match(s)
}

/// Accumulates field errors over one submitted form. The first error recorded for a field wins.
pub struct FormValidator<'a> {
    form: &'a FormData,
    errors: FieldErrors,
}

impl<'a> FormValidator<'a> {
    pub fn new(form: &'a FormData) -> Self {
        FormValidator {
            form,
            errors: FieldErrors::new(),
        }
    }

    /// Non-empty submitted value.
    fn value(&self, field: &str) -> Option<&'a str> {
        self.form.get(field).map(String::as_str).filter(|v| !v.is_empty())
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn required(mut self, field: &str, message: &str) -> Self {
        if self.value(field).is_none() {
            self.reject(field, message);
        }
        self
    }

    /// Every required column of `table` must be present and non-empty.
    pub fn columns(mut self, table: &TableDef) -> Self {
        for c in table.columns.iter().filter(|c| c.required) {
            if self.value(c.name).is_none() {
                self.reject(c.name, format!("{} is required.", c.label));
            }
        }
        self
    }

    pub fn email(mut self, field: &str) -> Self {
        match self.value(field) {
            None => self.reject(field, "Email is required."),
            Some(v) if !is_valid_email(v) => self.reject(field, "Please enter a valid email address."),
            Some(_) => {}
        }
        self
    }

    /// Presence only; used on login where strength is not re-checked.
    pub fn password_present(mut self, field: &str) -> Self {
        if self.value(field).is_none() {
            self.reject(field, "Password is required.");
        }
        self
    }

    pub fn password(mut self, field: &str) -> Self {
        match self.value(field) {
            None => self.reject(field, "Password is required."),
            Some(v) if !is_strong_password(v) => self.reject(field, PASSWORD_RULE),
            Some(_) => {}
        }
        self
    }

    pub fn confirmation(mut self, field: &str, password_field: &str) -> Self {
        match self.value(field) {
            None => self.reject(field, "Confirm password is required."),
            Some(v) if self.form.get(password_field).map(String::as_str) != Some(v) => {
                self.reject(field, "Passwords do not match.")
            }
            Some(_) => {}
        }
        self
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        let errors = self.into_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
