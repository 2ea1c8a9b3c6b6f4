//! Store access and form validation used by the handlers.

mod accounts;
mod crud;
mod dashboard;
mod validation;
pub use accounts::AccountService;
pub use crud::CrudService;
pub use dashboard::DashboardService;
pub use validation::*;
