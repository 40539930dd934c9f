//! Generic repository abstraction over persisted entity tables.
//!
//! Each entity table exposes the same surface: enumerate, fetch by id,
//! filter, save, and merge-update. One in-memory implementation serves every
//! table by composition; on-disk or remote backends are collaborators that
//! implement the same trait.

use uuid::Uuid;

use crate::domain::Identifiable;
use crate::errors::CashflowError;

/// Trait that abstracts interaction with one persisted entity table.
pub trait Repository<T: Identifiable + Clone> {
    /// Returns every record in the table.
    fn find_all(&self) -> Result<Vec<T>, CashflowError>;

    /// Returns the record with the given id, if any.
    fn find_one(&self, id: Uuid) -> Result<Option<T>, CashflowError>;

    /// Returns the records matching the predicate, in insertion order.
    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Vec<T>, CashflowError>;

    /// Persists a new record and returns its id.
    fn save(&mut self, record: T) -> Result<Uuid, CashflowError>;

    /// Replaces the record with the matching id, keeping that id. Returns
    /// whether a record was updated.
    fn update(&mut self, id: Uuid, record: T) -> Result<bool, CashflowError>;
}

/// Vec-backed table used for tests and as the default composition target.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository<T> {
    records: Vec<T>,
}

impl<T: Identifiable + Clone> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Identifiable + Clone> Repository<T> for MemoryRepository<T> {
    fn find_all(&self) -> Result<Vec<T>, CashflowError> {
        Ok(self.records.clone())
    }

    fn find_one(&self, id: Uuid) -> Result<Option<T>, CashflowError> {
        Ok(self.records.iter().find(|record| record.id() == id).cloned())
    }

    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Vec<T>, CashflowError> {
        Ok(self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }

    fn save(&mut self, record: T) -> Result<Uuid, CashflowError> {
        let id = record.id();
        self.records.push(record);
        Ok(id)
    }

    fn update(&mut self, id: Uuid, record: T) -> Result<bool, CashflowError> {
        match self.records.iter_mut().find(|existing| existing.id() == id) {
            Some(existing) => {
                *existing = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Account;

    #[test]
    fn save_then_find_one_round_trips() {
        let mut table = MemoryRepository::new();
        let account = Account::new("FOOD", "Groceries");
        let id = table.save(account.clone()).expect("save succeeds");
        let fetched = table.find_one(id).expect("lookup succeeds");
        assert_eq!(fetched, Some(account));
    }

    #[test]
    fn find_filters_by_predicate() {
        let mut table = MemoryRepository::new();
        table.save(Account::new("FOOD", "Groceries")).unwrap();
        table.save(Account::new("RENT", "Housing")).unwrap();
        let matches = table
            .find(&|account: &Account| account.name == "RENT")
            .expect("query succeeds");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "RENT");
    }

    #[test]
    fn update_replaces_only_the_matching_record() {
        let mut table = MemoryRepository::new();
        let account = Account::new("FOOD", "Groceries");
        let id = table.save(account.clone()).unwrap();

        let mut changed = account;
        changed.description = "Groceries and dining".into();
        assert!(table.update(id, changed.clone()).expect("update succeeds"));
        assert_eq!(table.find_one(id).unwrap(), Some(changed));

        let unrelated = Account::new("RENT", "Housing");
        assert!(!table.update(unrelated.id, unrelated).expect("no match"));
    }
}
