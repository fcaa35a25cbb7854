//! Core diff engine implementation.
//!
//! Classifies the stacks of two snapshots in a single pass over the right
//! side. A working copy of the left side loses every entry that gets matched,
//! so whatever is left over at the end is exactly the left-only set.

use super::ranker::rank_result;
use super::schema::DiffResult;
use crate::aggregator::{Fingerprint, Snapshot};
use crate::parser::{PairedRecord, StackRecord};
use log::debug;
use std::collections::HashMap;

/// Classify two snapshots into changed, left-only and right-only stacks
///
/// **Public** - unranked core of `generate_diff`
///
/// A stack is matched when its fingerprint and its full body agree. Matched
/// stacks are reported as changed only when `|left - right| > diff_threshold`,
/// so a negative threshold reports every matched stack, equal counts included.
/// Neither snapshot is modified; the collections come back in no particular
/// order.
pub fn diff_snapshots(left: &Snapshot, right: &Snapshot, diff_threshold: i64) -> DiffResult {
    let mut remaining: HashMap<Fingerprint, Vec<&StackRecord>> = left
        .buckets()
        .iter()
        .map(|(key, bucket)| (*key, bucket.iter().collect()))
        .collect();

    let mut result = DiffResult::default();

    for (key, bucket) in right.buckets() {
        for r in bucket {
            match take_match(&mut remaining, *key, &r.body) {
                Some(l) => {
                    if exceeds_threshold(l.count.abs_diff(r.count), diff_threshold) {
                        result
                            .changed
                            .push(PairedRecord::new(l.count, r.count, l.body.clone()));
                    }
                }
                None => result.right_only.push(r.clone()),
            }
        }
    }

    result.left_only = remaining.into_values().flatten().cloned().collect();

    debug!(
        "Diff: {} changed, {} left only, {} right only",
        result.changed.len(),
        result.left_only.len(),
        result.right_only.len()
    );

    result
}

/// Diff two snapshots and rank every collection by descending severity
///
/// **Public** - main entry point for diffing
///
/// # Example
/// ```ignore
/// let left = Snapshot::from_dump(&left_text, 10)?;
/// let right = Snapshot::from_dump(&right_text, 10)?;
/// let result = generate_diff(&left, &right, 5);
/// ```
pub fn generate_diff(left: &Snapshot, right: &Snapshot, diff_threshold: i64) -> DiffResult {
    rank_result(diff_snapshots(left, right, diff_threshold))
}

/// `delta > threshold`, with every delta exceeding a negative threshold
///
/// **Private** - internal helper for diff_snapshots
fn exceeds_threshold(delta: u64, threshold: i64) -> bool {
    u64::try_from(threshold).map_or(true, |threshold| delta > threshold)
}

/// Remove and return the left record with this fingerprint and body
///
/// **Private** - internal helper for diff_snapshots
fn take_match<'a>(
    remaining: &mut HashMap<Fingerprint, Vec<&'a StackRecord>>,
    key: Fingerprint,
    body: &str,
) -> Option<&'a StackRecord> {
    let candidates = remaining.get_mut(&key)?;
    let index = candidates.iter().position(|l| l.body == body)?;
    let matched = candidates.swap_remove(index);

    if candidates.is_empty() {
        remaining.remove(&key);
    }

    Some(matched)
}
