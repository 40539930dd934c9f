use uuid::Uuid;

use crate::domain::{Budget, BudgetAccount, BudgetDraft, DateWindow, User};
use crate::errors::CashflowError;
use crate::store::Repository;

/// Budget persistence and active-budget resolution.
pub struct BudgetService;

impl BudgetService {
    pub fn get(
        budgets: &impl Repository<Budget>,
        id: Uuid,
    ) -> Result<Option<Budget>, CashflowError> {
        budgets.find_one(id)
    }

    /// Resolves the budget selected by the active user's settings.
    ///
    /// `Ok(None)` means no resolvable active user or no budget selected
    /// yet; a selected id that no longer exists is an invalid reference.
    pub fn active_budget(
        budgets: &impl Repository<Budget>,
        users: &impl Repository<User>,
    ) -> Result<Option<Budget>, CashflowError> {
        let Some(user) = super::UserService::active_user(users)? else {
            return Ok(None);
        };
        let Some(budget_id) = user.budget_setting() else {
            return Ok(None);
        };
        match budgets.find_one(budget_id)? {
            Some(budget) => Ok(Some(budget)),
            None => Err(CashflowError::InvalidRef(format!(
                "selected budget {budget_id} does not exist"
            ))),
        }
    }

    pub fn create(
        budgets: &mut impl Repository<Budget>,
        draft: BudgetDraft,
    ) -> Result<Option<Uuid>, CashflowError> {
        let Some(budget) = Self::materialize(draft) else {
            tracing::debug!("rejected budget draft: missing required fields");
            return Ok(None);
        };
        budgets.save(budget).map(Some)
    }

    pub fn update(
        budgets: &mut impl Repository<Budget>,
        id: Uuid,
        draft: BudgetDraft,
    ) -> Result<Option<Uuid>, CashflowError> {
        let Some(mut budget) = Self::materialize(draft) else {
            tracing::debug!(%id, "rejected budget update: missing required fields");
            return Ok(None);
        };
        budget.id = id;
        if budgets.update(id, budget)? {
            Ok(Some(id))
        } else {
            Ok(None)
        }
    }

    fn materialize(draft: BudgetDraft) -> Option<Budget> {
        if !draft.is_valid() {
            return None;
        }
        // Validation guarantees the window dates. Lines past the first are
        // never validated; incomplete ones are dropped here.
        let window = DateWindow::new(draft.start?, draft.end?);
        let accounts = draft
            .accounts
            .into_iter()
            .filter_map(|line| {
                Some(BudgetAccount {
                    id: line.id?,
                    allocation: line.allocation?,
                })
            })
            .collect();
        Some(Budget::new(
            draft.name.unwrap_or_default(),
            window,
            accounts,
        ))
    }
}
