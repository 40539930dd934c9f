//! Entity services: validation-gated create/update paths and the query
//! helpers the metrics pipeline is wired up with.
//!
//! Create and update return `Ok(None)` when the draft fails validation;
//! nothing is persisted and no error is raised. `Err` is reserved for
//! repository failures.

pub mod account_service;
pub mod budget_service;
pub mod entry_service;
pub mod user_service;

pub use account_service::AccountService;
pub use budget_service::BudgetService;
pub use entry_service::EntryService;
pub use user_service::UserService;
