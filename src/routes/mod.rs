//! Route tables. Paths match the site's public URLs.

pub mod auth;
pub mod common;
pub mod entity;
pub mod public;

pub use auth::auth_routes;
pub use common::common_routes;
pub use entity::admin_routes;
pub use public::public_routes;
