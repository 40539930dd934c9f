use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// A single recorded transaction against an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: Uuid,
    pub description: String,
    /// Whole-unit amount; fractional input is truncated at the draft stage.
    pub amount: i64,
    /// The date the money was actually used, which places the entry inside
    /// or outside a budget window.
    pub date_used: NaiveDate,
    pub account_id: Uuid,
    pub user_id: Uuid,
}

impl Entry {
    pub fn new(
        description: impl Into<String>,
        amount: i64,
        date_used: NaiveDate,
        account_id: Uuid,
        user_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date_used,
            account_id,
            user_id,
        }
    }
}

impl Identifiable for Entry {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Unvalidated entry input as received from a form or import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDraft {
    pub description: Option<String>,
    /// Raw amount before integer coercion.
    pub amount: Option<f64>,
    pub date_used: Option<NaiveDate>,
    pub account_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

impl EntryDraft {
    /// Required fields: description, a non-zero amount, the usage date, and
    /// both owning references.
    pub fn is_valid(&self) -> bool {
        super::account::present(&self.description)
            && self.amount.is_some_and(|amount| amount != 0.0)
            && self.date_used.is_some()
            && self.account_id.is_some()
            && self.user_id.is_some()
    }

    /// Coerces the raw amount to a whole unit, truncating any fraction.
    pub fn amount_as_integer(&self) -> Option<i64> {
        self.amount.map(|amount| amount.trunc() as i64)
    }
}
