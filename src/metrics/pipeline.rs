use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Account, Budget, Entry};
use crate::errors::CashflowError;

use super::{compute_progress, resolve_allocation, total_expense, Progress};

/// An account enriched with the metrics derived for one budget window.
/// Built fresh on every computation and discarded after rendering; never
/// persisted back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub allocation: i64,
    pub total_expense: i64,
    pub progress: Progress,
}

impl AccountSummary {
    /// Remaining allocation; negative once the account is over budget.
    pub fn balance(&self) -> i64 {
        self.allocation - self.total_expense
    }
}

/// Derives usage metrics for each account against one budget.
///
/// Accounts are processed in the order supplied (callers typically sort
/// alphabetically first). `entry_lookup` is expected to return the entries
/// for one account whose usage date falls inside the inclusive window; a
/// lookup failure aborts this computation and propagates to the caller.
pub fn compute_account_metrics<F>(
    accounts: &[Account],
    budget: &Budget,
    mut entry_lookup: F,
) -> Result<Vec<AccountSummary>, CashflowError>
where
    F: FnMut(Uuid, NaiveDate, NaiveDate) -> Result<Vec<Entry>, CashflowError>,
{
    let mut summaries = Vec::with_capacity(accounts.len());
    for account in accounts {
        let allocation = resolve_allocation(&budget.accounts, account.id);
        let entries = entry_lookup(account.id, budget.date.start, budget.date.end)?;
        let total_expense = total_expense(&entries);
        let progress = compute_progress(total_expense, allocation);
        tracing::debug!(
            account = %account.name,
            allocation,
            total_expense,
            percentage = progress.percentage,
            "derived account metrics"
        );
        summaries.push(AccountSummary {
            id: account.id,
            name: account.name.clone(),
            description: account.description.clone(),
            allocation,
            total_expense,
            progress,
        });
    }
    Ok(summaries)
}
