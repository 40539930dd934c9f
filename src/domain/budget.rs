use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// Inclusive date range over which entries are attributed to a budget.
///
/// `start <= end` is expected but not enforced; a reversed window simply
/// matches no entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One allocation line inside a budget: the account it funds and the amount
/// set aside for it over the budget window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetAccount {
    pub id: Uuid,
    pub allocation: i64,
}

/// A named date window with an ordered list of per-account allocations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    pub id: Uuid,
    pub name: String,
    pub date: DateWindow,
    pub accounts: Vec<BudgetAccount>,
}

impl Budget {
    pub fn new(name: impl Into<String>, date: DateWindow, accounts: Vec<BudgetAccount>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            accounts,
        }
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Budget {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Unvalidated allocation line input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetAccountDraft {
    pub id: Option<Uuid>,
    pub allocation: Option<i64>,
}

/// Unvalidated budget input as received from a form or import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetDraft {
    pub name: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub accounts: Vec<BudgetAccountDraft>,
}

impl BudgetDraft {
    /// Required fields: a name, both window dates, and a non-empty
    /// allocation list whose first line carries an id and a positive
    /// allocation.
    ///
    /// Only the first allocation line is inspected. Later lines can be
    /// incomplete and the draft still validates; known gap, kept as
    /// documented behavior.
    pub fn is_valid(&self) -> bool {
        let first_line_valid = self
            .accounts
            .first()
            .is_some_and(|line| line.id.is_some() && line.allocation.is_some_and(|a| a > 0));

        first_line_valid
            && self.start.is_some()
            && self.end.is_some()
            && super::account::present(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BudgetDraft {
        BudgetDraft {
            name: Some("March".into()),
            start: NaiveDate::from_ymd_opt(2024, 3, 1),
            end: NaiveDate::from_ymd_opt(2024, 3, 31),
            accounts: vec![BudgetAccountDraft {
                id: Some(Uuid::new_v4()),
                allocation: Some(500),
            }],
        }
    }

    #[test]
    fn complete_draft_is_valid() {
        assert!(draft().is_valid());
    }

    #[test]
    fn empty_allocation_list_is_invalid() {
        let mut incomplete = draft();
        incomplete.accounts.clear();
        assert!(!incomplete.is_valid());
    }

    #[test]
    fn zero_allocation_on_first_line_is_invalid() {
        let mut incomplete = draft();
        incomplete.accounts[0].allocation = Some(0);
        assert!(!incomplete.is_valid());
    }

    #[test]
    fn only_the_first_allocation_line_is_checked() {
        let mut lenient = draft();
        lenient.accounts.push(BudgetAccountDraft::default());
        assert!(lenient.is_valid());
    }

    #[test]
    fn missing_window_date_is_invalid() {
        let mut incomplete = draft();
        incomplete.end = None;
        assert!(!incomplete.is_valid());
    }

    #[test]
    fn window_contains_is_inclusive_on_both_ends() {
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        );
        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    }
}
