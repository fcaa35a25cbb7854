//! Build a snapshot from parsed dump records.
//!
//! A snapshot holds one entry per distinct stack body whose count is
//! strictly greater than the `over` threshold. Entries are bucketed by
//! fingerprint; within a bucket bodies are compared in full, so two bodies
//! that happen to share a hash stay separate.

use super::fingerprint::Fingerprint;
use crate::parser::{parse_dump, StackRecord};
use crate::utils::error::{LoadError, ParseError};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Deduplicated, threshold-filtered collection of records from one dump
///
/// **Public** - input to the diff engine
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    stacks: HashMap<Fingerprint, Vec<StackRecord>>,

    /// Records seen before filtering
    records_parsed: usize,
}

impl Snapshot {
    /// Build a snapshot, keeping only records with `count > over`
    ///
    /// **Public** - main constructor
    ///
    /// When the same body appears twice the later record wins.
    pub fn build(records: Vec<StackRecord>, over: i64) -> Self {
        let mut snapshot = Self {
            stacks: HashMap::with_capacity(records.len()),
            records_parsed: records.len(),
        };

        for record in records.into_iter().filter(|r| r.count > over) {
            snapshot.insert(record);
        }

        debug!(
            "Snapshot retained {} of {} records (over {})",
            snapshot.len(),
            snapshot.records_parsed,
            over
        );

        snapshot
    }

    /// Parse raw dump text and build a snapshot from it
    ///
    /// **Public** - convenience wrapper around `parse_dump` + `build`
    pub fn from_dump(raw: &str, over: i64) -> Result<Self, ParseError> {
        Ok(Self::build(parse_dump(raw)?, over))
    }

    /// Insert a record, replacing any earlier record with the same body
    pub fn insert(&mut self, record: StackRecord) {
        let key = Fingerprint::of(&record.body);
        let bucket = self.stacks.entry(key).or_default();

        match bucket.iter_mut().find(|existing| existing.body == record.body) {
            Some(existing) => *existing = record,
            None => {
                if !bucket.is_empty() {
                    debug!("Fingerprint collision on {key}, keeping both stacks");
                }
                bucket.push(record);
            }
        }
    }

    /// Look up the record for an exact stack body
    pub fn get(&self, body: &str) -> Option<&StackRecord> {
        self.stacks
            .get(&Fingerprint::of(body))?
            .iter()
            .find(|record| record.body == body)
    }

    /// Number of distinct stacks retained
    pub fn len(&self) -> usize {
        self.stacks.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Number of records parsed before the threshold was applied
    pub fn records_parsed(&self) -> usize {
        self.records_parsed
    }

    /// Records grouped by fingerprint
    pub(crate) fn buckets(&self) -> &HashMap<Fingerprint, Vec<StackRecord>> {
        &self.stacks
    }
}

/// Read a dump file and build its snapshot
///
/// **Public** - used by the diff command for both inputs
///
/// # Errors
/// * `LoadError::Io` - file cannot be read
/// * `LoadError::Parse` - file content is not a valid dump
pub fn load_snapshot(path: impl AsRef<Path>, over: i64) -> Result<Snapshot, LoadError> {
    let path = path.as_ref();

    debug!("Reading dump from: {}", path.display());

    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot = Snapshot::from_dump(&raw, over).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "{}: {} records, {} over threshold",
        path.display(),
        snapshot.records_parsed(),
        snapshot.len()
    );

    Ok(snapshot)
}
