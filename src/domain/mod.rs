//! Domain records, validation drafts, and shared entity traits.

pub mod account;
pub mod budget;
pub mod common;
pub mod entry;
pub mod user;

pub use account::{Account, AccountDraft};
pub use budget::{Budget, BudgetAccount, BudgetAccountDraft, BudgetDraft, DateWindow};
pub use common::{Identifiable, NamedEntity};
pub use entry::{Entry, EntryDraft};
pub use user::{User, UserDraft};
