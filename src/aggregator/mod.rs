//! Aggregation of parsed records into comparable snapshots.
//!
//! This module turns a list of dump records into:
//! - Fingerprints (fast equality keys over stack bodies)
//! - Snapshots (one threshold-filtered entry per distinct stack)

pub mod fingerprint;
pub mod snapshot;

// Re-export main types and functions
pub use fingerprint::{fnv1a_32, Fingerprint};
pub use snapshot::{load_snapshot, Snapshot};
