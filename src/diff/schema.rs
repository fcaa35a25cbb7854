//! Diff result and report structures.

use crate::parser::{PairedRecord, StackRecord};
use crate::utils::config::REPORT_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Three-way classification of two snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Stacks present on both sides whose counts moved by more than the threshold
    pub changed: Vec<PairedRecord>,

    /// Stacks present only in the left snapshot
    pub left_only: Vec<StackRecord>,

    /// Stacks present only in the right snapshot
    pub right_only: Vec<StackRecord>,
}

impl DiffResult {
    /// Changed entries that should be shown given `--omitidentical`
    pub fn visible_changed(&self, omit_identical: bool) -> impl Iterator<Item = &PairedRecord> {
        self.changed
            .iter()
            .filter(move |pair| !(omit_identical && pair.is_identical()))
    }

    /// Drop equal-count pairs in place when `omit_identical` is set
    pub fn retain_visible(&mut self, omit_identical: bool) {
        if omit_identical {
            self.changed.retain(|pair| !pair.is_identical());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.left_only.is_empty() && self.right_only.is_empty()
    }
}

/// Where a snapshot came from and how much of it survived the threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub path: String,
    pub records_parsed: usize,
    pub records_retained: usize,
}

impl SnapshotMetadata {
    pub fn new(path: &Path, records_parsed: usize, records_retained: usize) -> Self {
        Self {
            path: path.display().to_string(),
            records_parsed,
            records_retained,
        }
    }
}

/// Top-level report written by `--output`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    /// Schema version for compatibility checking
    pub report_version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub left: SnapshotMetadata,
    pub right: SnapshotMetadata,

    /// Minimum count a record needed to be kept
    pub over: i64,

    /// Shared stacks must change by more than this to be reported
    pub diff: i64,

    pub omit_identical: bool,

    #[serde(flatten)]
    pub result: DiffResult,
}

impl DiffReport {
    /// Wrap a ranked result; equal-count pairs are dropped when `omit_identical` is set
    pub fn new(
        left: SnapshotMetadata,
        right: SnapshotMetadata,
        over: i64,
        diff: i64,
        omit_identical: bool,
        mut result: DiffResult,
    ) -> Self {
        result.retain_visible(omit_identical);

        Self {
            report_version: REPORT_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            left,
            right,
            over,
            diff,
            omit_identical,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_identical() -> DiffResult {
        DiffResult {
            changed: vec![PairedRecord::new(12, 12, "same"), PairedRecord::new(12, 20, "grew")],
            left_only: vec![],
            right_only: vec![],
        }
    }

    #[test]
    fn test_visible_changed_respects_omit() {
        let result = result_with_identical();
        assert_eq!(result.visible_changed(true).count(), 1);
        assert_eq!(result.visible_changed(false).count(), 2);
    }

    #[test]
    fn test_report_drops_identical_when_omitting() {
        let meta = SnapshotMetadata::new(Path::new("a.txt"), 2, 2);
        let report = DiffReport::new(meta.clone(), meta, 10, -1, true, result_with_identical());

        assert_eq!(report.result.changed.len(), 1);
        assert_eq!(report.result.changed[0].body, "grew");
        assert_eq!(report.report_version, REPORT_VERSION);
    }

    #[test]
    fn test_report_keeps_identical_when_not_omitting() {
        let meta = SnapshotMetadata::new(Path::new("a.txt"), 2, 2);
        let report = DiffReport::new(meta.clone(), meta, 10, -1, false, result_with_identical());
        assert_eq!(report.result.changed.len(), 2);
    }
}
