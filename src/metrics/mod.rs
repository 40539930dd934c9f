//! The derivation engine: allocation lookup, expense aggregation, progress
//! math, and the per-account metrics pipeline.

pub mod allocation;
pub mod expense;
pub mod pipeline;
pub mod progress;

pub use allocation::resolve_allocation;
pub use expense::total_expense;
pub use pipeline::{compute_account_metrics, AccountSummary};
pub use progress::{compute_progress, OverflowSide, Progress, ProgressColor};
