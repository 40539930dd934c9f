use uuid::Uuid;

use crate::domain::BudgetAccount;

/// Looks up the allocation assigned to `account_id` within a budget's
/// allocation lines.
///
/// The first matching line wins. An account without a line has a zero
/// allocation; that is an answer, not an error.
pub fn resolve_allocation(budget_accounts: &[BudgetAccount], account_id: Uuid) -> i64 {
    budget_accounts
        .iter()
        .find(|line| line.id == account_id)
        .map_or(0, |line| line.allocation)
}
