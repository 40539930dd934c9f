use crate::domain::Entry;

/// Sums entry amounts. The entries are expected to be pre-filtered by the
/// repository to one account and one budget window; this function only
/// aggregates. An empty slice sums to 0.
pub fn total_expense(entries: &[Entry]) -> i64 {
    entries.iter().map(|entry| entry.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn entry(amount: i64) -> Entry {
        Entry::new(
            "test",
            amount,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
    }

    #[test]
    fn empty_slice_sums_to_zero() {
        assert_eq!(total_expense(&[]), 0);
    }

    #[test]
    fn single_entry_sums_to_its_amount() {
        assert_eq!(total_expense(&[entry(42)]), 42);
    }

    #[test]
    fn sums_all_amounts() {
        let entries = vec![entry(10), entry(20), entry(12)];
        assert_eq!(total_expense(&entries), 42);
    }

    #[test]
    fn handles_large_entry_sets_without_recursion_limits() {
        let entries: Vec<Entry> = (0..100_000).map(|_| entry(1)).collect();
        assert_eq!(total_expense(&entries), 100_000);
    }
}
