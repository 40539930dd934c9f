use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// A spending bucket that budget allocations and entries refer to.
///
/// Usage metrics (allocation, total expense, progress) are never stored on
/// the account; they are recomputed per request and live on
/// [`crate::metrics::AccountSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl Account {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Unvalidated account input as received from a form or import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountDraft {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl AccountDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Required fields: `name` and `description`, both non-empty.
    pub fn is_valid(&self) -> bool {
        present(&self.name) && present(&self.description)
    }
}

pub(crate) fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}
