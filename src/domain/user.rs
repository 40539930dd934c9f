use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::config::BUDGET_SETTING;
use crate::domain::common::{Identifiable, NamedEntity};

/// An operating context for the application. Exactly one user is expected
/// to be marked active at a time; queries that depend on the active user
/// refuse to resolve otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
    /// Named preferences, including the selected budget id under
    /// [`BUDGET_SETTING`].
    #[serde(default)]
    pub settings: BTreeMap<String, Value>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            active: false,
            settings: BTreeMap::new(),
        }
    }

    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn with_setting(mut self, name: impl Into<String>, value: Value) -> Self {
        self.settings.insert(name.into(), value);
        self
    }

    pub fn setting(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }

    /// Reads the selected budget id out of the settings map.
    pub fn budget_setting(&self) -> Option<Uuid> {
        self.setting(BUDGET_SETTING)
            .and_then(Value::as_str)
            .and_then(|raw| Uuid::parse_str(raw).ok())
    }
}

impl Identifiable for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for User {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Unvalidated user input as received from a form or import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: Option<String>,
    pub active: bool,
    pub settings: BTreeMap<String, Value>,
}

impl UserDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            active: false,
            settings: BTreeMap::new(),
        }
    }

    /// Required fields: a non-empty name.
    pub fn is_valid(&self) -> bool {
        super::account::present(&self.name)
    }
}
