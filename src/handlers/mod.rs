//! HTTP handlers: account auth, admin dashboard, entity CRUD, public pages.

pub mod admin;
pub mod auth;
pub mod entity;
pub mod public;
