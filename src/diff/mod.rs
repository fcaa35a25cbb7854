//! Snapshot diffing and ranking.
//!
//! This module compares two snapshots (left vs right) and classifies every
//! stack as changed, left-only or right-only, then ranks each list by
//! severity.
//!
//! # Example
//! ```ignore
//! use stackdiff::aggregator::load_snapshot;
//! use stackdiff::diff::generate_diff;
//!
//! let left = load_snapshot("before.txt", 10)?;
//! let right = load_snapshot("after.txt", 10)?;
//! let result = generate_diff(&left, &right, 5);
//! ```

mod engine;
mod ranker;
mod schema;

// Public API exports
pub use engine::{diff_snapshots, generate_diff};
pub use ranker::{rank, rank_result, Severity};
pub use schema::{DiffReport, DiffResult, SnapshotMetadata};
