use uuid::Uuid;

use crate::domain::{Account, AccountDraft, Budget, Entry};
use crate::errors::CashflowError;
use crate::metrics::{compute_account_metrics, AccountSummary};
use crate::store::Repository;

/// Account persistence and the summary-list flow.
pub struct AccountService;

impl AccountService {
    pub fn get(
        accounts: &impl Repository<Account>,
        id: Uuid,
    ) -> Result<Option<Account>, CashflowError> {
        accounts.find_one(id)
    }

    /// Derives the summary list for one budget: every account, sorted
    /// alphabetically by name, enriched with allocation, total expense,
    /// and progress.
    pub fn overview(
        accounts: &impl Repository<Account>,
        entries: &impl Repository<Entry>,
        budget: &Budget,
    ) -> Result<Vec<AccountSummary>, CashflowError> {
        let mut sorted = accounts.find_all()?;
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        compute_account_metrics(&sorted, budget, |account_id, start, end| {
            super::EntryService::find_account_budget_range(entries, account_id, start, end)
        })
    }

    /// Derives the summary for a single account against the budget.
    pub fn summary(
        accounts: &impl Repository<Account>,
        entries: &impl Repository<Entry>,
        budget: &Budget,
        id: Uuid,
    ) -> Result<Option<AccountSummary>, CashflowError> {
        let Some(account) = accounts.find_one(id)? else {
            return Ok(None);
        };
        let mut summaries =
            compute_account_metrics(std::slice::from_ref(&account), budget, |account_id, start, end| {
                super::EntryService::find_account_budget_range(entries, account_id, start, end)
            })?;
        Ok(summaries.pop())
    }

    /// Account names are stored upper-cased.
    pub fn create(
        accounts: &mut impl Repository<Account>,
        draft: AccountDraft,
    ) -> Result<Option<Uuid>, CashflowError> {
        let Some(account) = Self::materialize(draft) else {
            tracing::debug!("rejected account draft: missing required fields");
            return Ok(None);
        };
        accounts.save(account).map(Some)
    }

    pub fn update(
        accounts: &mut impl Repository<Account>,
        id: Uuid,
        draft: AccountDraft,
    ) -> Result<Option<Uuid>, CashflowError> {
        let Some(mut account) = Self::materialize(draft) else {
            tracing::debug!(%id, "rejected account update: missing required fields");
            return Ok(None);
        };
        account.id = id;
        if accounts.update(id, account)? {
            Ok(Some(id))
        } else {
            Ok(None)
        }
    }

    fn materialize(draft: AccountDraft) -> Option<Account> {
        if !draft.is_valid() {
            return None;
        }
        Some(Account::new(
            draft.name.unwrap_or_default().to_uppercase(),
            draft.description.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetAccount, DateWindow};
    use crate::store::MemoryRepository;
    use chrono::NaiveDate;

    #[test]
    fn create_uppercases_the_name() {
        let mut accounts = MemoryRepository::new();
        let id = AccountService::create(&mut accounts, AccountDraft::new("food", "Groceries"))
            .unwrap()
            .expect("valid draft saves");
        assert_eq!(accounts.find_one(id).unwrap().unwrap().name, "FOOD");
    }

    #[test]
    fn create_rejects_missing_description() {
        let mut accounts = MemoryRepository::new();
        let draft = AccountDraft {
            name: Some("food".into()),
            description: None,
        };
        assert!(AccountService::create(&mut accounts, draft)
            .unwrap()
            .is_none());
        assert!(accounts.is_empty());
    }

    #[test]
    fn overview_sorts_accounts_alphabetically() {
        let mut accounts = MemoryRepository::new();
        let entries: MemoryRepository<Entry> = MemoryRepository::new();
        for (name, description) in [("RENT", "Housing"), ("FOOD", "Groceries")] {
            AccountService::create(&mut accounts, AccountDraft::new(name, description))
                .unwrap()
                .expect("valid draft saves");
        }
        let budget = Budget::new(
            "March",
            DateWindow::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            ),
            vec![BudgetAccount {
                id: Uuid::new_v4(),
                allocation: 100,
            }],
        );
        let summaries =
            AccountService::overview(&accounts, &entries, &budget).expect("overview succeeds");
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["FOOD", "RENT"]);
    }
}
