//! Severity ranking for diff output.
//!
//! Every collection is ordered by descending severity. The sort is unstable:
//! entries with equal severity come out in no guaranteed order.

use super::schema::DiffResult;
use crate::parser::{PairedRecord, StackRecord};
use std::cmp::Reverse;

/// Anything that can be ranked in diff output
pub trait Severity {
    /// Larger values are printed first
    fn severity(&self) -> i64;
}

impl Severity for StackRecord {
    fn severity(&self) -> i64 {
        StackRecord::severity(self)
    }
}

impl Severity for PairedRecord {
    fn severity(&self) -> i64 {
        PairedRecord::severity(self)
    }
}

/// Sort in place by descending severity
pub fn rank<T: Severity>(items: &mut [T]) {
    items.sort_unstable_by_key(|item| Reverse(item.severity()));
}

/// Rank all three collections of a diff result
pub fn rank_result(mut result: DiffResult) -> DiffResult {
    rank(&mut result.changed);
    rank(&mut result.left_only);
    rank(&mut result.right_only);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn severities<T: Severity>(items: &[T]) -> Vec<i64> {
        items.iter().map(Severity::severity).collect()
    }

    #[test]
    fn test_rank_records_descending() {
        let mut records = vec![
            StackRecord::new(11, "a"),
            StackRecord::new(40, "b"),
            StackRecord::new(25, "c"),
        ];
        rank(&mut records);
        assert_eq!(severities(&records), vec![40, 25, 11]);
    }

    #[test]
    fn test_rank_pairs_by_larger_side() {
        let mut pairs = vec![
            PairedRecord::new(30, 12, "a"),
            PairedRecord::new(12, 50, "b"),
            PairedRecord::new(35, 1, "c"),
        ];
        rank(&mut pairs);
        assert_eq!(severities(&pairs), vec![50, 35, 30]);
        assert_eq!(pairs[0].body, "b");
    }

    #[test]
    fn test_rank_result_orders_every_collection() {
        let result = rank_result(DiffResult {
            changed: vec![PairedRecord::new(1, 20, "x"), PairedRecord::new(90, 2, "y")],
            left_only: vec![StackRecord::new(11, "l1"), StackRecord::new(12, "l2")],
            right_only: vec![StackRecord::new(13, "r1"), StackRecord::new(99, "r2")],
        });

        assert_eq!(result.changed[0].body, "y");
        assert_eq!(result.left_only[0].body, "l2");
        assert_eq!(result.right_only[0].body, "r2");
    }
}
