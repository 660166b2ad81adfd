//! Derived totals over the entry list

use crate::models::{ExpenseEntry, Money};

/// Sum of all entry amounts; zero for an empty list
///
/// Validated amounts are capped at [`crate::validation::MAX_AMOUNT`], so the
/// sum is exact for any realistic list. Past the i64 range it saturates.
pub fn total(entries: &[ExpenseEntry]) -> Money {
    entries.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryStatus, NewEntry};

    fn entry(minor: i64) -> ExpenseEntry {
        ExpenseEntry::from_new(NewEntry {
            item: "x".into(),
            month: "Mar-24".into(),
            amount: Money::from_minor(minor),
            deadline: None,
            status: EntryStatus::Pending,
        })
    }

    #[test]
    fn test_empty_total_is_zero() {
        assert_eq!(total(&[]), Money::zero());
    }

    #[test]
    fn test_total_is_sum() {
        let entries = vec![entry(150_000), entry(2_550), entry(99)];
        assert_eq!(total(&entries), Money::from_minor(152_649));
    }

    #[test]
    fn test_total_order_independent() {
        let mut entries = vec![entry(1), entry(20), entry(300), entry(4_000)];
        let forward = total(&entries);
        entries.reverse();
        assert_eq!(total(&entries), forward);
        entries.rotate_left(1);
        assert_eq!(total(&entries), forward);
    }

    #[test]
    fn test_total_of_largest_amounts_is_exact() {
        let max = crate::validation::MAX_AMOUNT.minor();
        let entries = vec![entry(max), entry(max), entry(max)];
        assert_eq!(total(&entries), Money::from_minor(max * 3));
    }

    #[test]
    fn test_oversized_rows_are_rejected_before_summing() {
        use crate::services::{import::parse_csv_drafts, apply_drafts, ReportSession};

        let csv = "item,month,amount\nA,Mar-24,90000000000000000\nB,Mar-24,90000000000000000\n";
        let drafts = parse_csv_drafts(csv.as_bytes()).unwrap();
        let mut session = ReportSession::new("T");
        let outcome = apply_drafts(&mut session, drafts);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(session.total(), Money::zero());
    }

    #[test]
    fn test_total_saturates_instead_of_wrapping() {
        let entries = vec![entry(i64::MAX / 2 + 1), entry(i64::MAX / 2 + 1)];
        assert_eq!(total(&entries), Money::from_minor(i64::MAX));
    }
}
