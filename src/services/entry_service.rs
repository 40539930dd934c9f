use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{DateWindow, Entry, EntryDraft};
use crate::errors::CashflowError;
use crate::store::Repository;

/// Entry persistence and the budget-window queries that feed the metrics
/// pipeline.
pub struct EntryService;

impl EntryService {
    /// Entries for every account whose usage date falls inside the
    /// inclusive window.
    pub fn find_budget_range(
        entries: &impl Repository<Entry>,
        window: DateWindow,
    ) -> Result<Vec<Entry>, CashflowError> {
        entries.find(&|entry: &Entry| window.contains(entry.date_used))
    }

    /// Entries for one account whose usage date falls inside the inclusive
    /// window. This is the lookup the pipeline is wired up with.
    pub fn find_account_budget_range(
        entries: &impl Repository<Entry>,
        account_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Entry>, CashflowError> {
        entries.find(&|entry: &Entry| {
            entry.account_id == account_id && start <= entry.date_used && entry.date_used <= end
        })
    }

    /// Account detail listing: in-window entries sorted ascending by usage
    /// date.
    pub fn account_entries_by_date(
        entries: &impl Repository<Entry>,
        account_id: Uuid,
        window: DateWindow,
    ) -> Result<Vec<Entry>, CashflowError> {
        let mut found =
            Self::find_account_budget_range(entries, account_id, window.start, window.end)?;
        found.sort_by_key(|entry| entry.date_used);
        Ok(found)
    }

    pub fn create(
        entries: &mut impl Repository<Entry>,
        draft: EntryDraft,
    ) -> Result<Option<Uuid>, CashflowError> {
        let Some(entry) = Self::materialize(&draft) else {
            tracing::debug!("rejected entry draft: missing required fields");
            return Ok(None);
        };
        entries.save(entry).map(Some)
    }

    pub fn update(
        entries: &mut impl Repository<Entry>,
        id: Uuid,
        draft: EntryDraft,
    ) -> Result<Option<Uuid>, CashflowError> {
        let Some(mut entry) = Self::materialize(&draft) else {
            tracing::debug!(%id, "rejected entry update: missing required fields");
            return Ok(None);
        };
        entry.id = id;
        if entries.update(id, entry)? {
            Ok(Some(id))
        } else {
            Ok(None)
        }
    }

    fn materialize(draft: &EntryDraft) -> Option<Entry> {
        if !draft.is_valid() {
            return None;
        }
        Some(Entry::new(
            draft.description.clone().unwrap_or_default(),
            draft.amount_as_integer().unwrap_or_default(),
            draft.date_used?,
            draft.account_id?,
            draft.user_id?,
        ))
    }
}
