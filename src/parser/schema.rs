//! Record types shared by the parser, the diff engine and the writers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One stack shape from a dump and the number of goroutines sitting in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRecord {
    /// Number of goroutines sharing this stack at capture time
    pub count: i64,

    /// Stack body, treated as an opaque blob
    pub body: String,
}

impl StackRecord {
    pub fn new(count: i64, body: impl Into<String>) -> Self {
        Self {
            count,
            body: body.into(),
        }
    }

    /// Ranking key for an unmatched record
    pub fn severity(&self) -> i64 {
        self.count
    }
}

impl fmt::Display for StackRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.count, self.body)
    }
}

/// A stack present in both snapshots, with its count on each side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedRecord {
    pub left_count: i64,
    pub right_count: i64,
    pub body: String,
}

impl PairedRecord {
    pub fn new(left_count: i64, right_count: i64, body: impl Into<String>) -> Self {
        Self {
            left_count,
            right_count,
            body: body.into(),
        }
    }

    /// Ranking key: the larger of the two counts
    pub fn severity(&self) -> i64 {
        self.left_count.max(self.right_count)
    }

    /// Signed change from left to right
    pub fn delta(&self) -> i64 {
        self.right_count.saturating_sub(self.left_count)
    }

    /// True when both sides report the same count.
    ///
    /// Only reachable with a negative diff threshold; renderers use this to
    /// implement `--omitidentical`.
    pub fn is_identical(&self) -> bool {
        self.left_count == self.right_count
    }
}

impl fmt::Display for PairedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Left: {} Right: {} @ {}",
            self.left_count, self.right_count, self.body
        )
    }
}
