//! Diff command implementation.
//!
//! The diff command:
//! 1. Validates arguments
//! 2. Loads both dumps into snapshots
//! 3. Diffs and ranks the snapshots
//! 4. Prints the result and optionally writes a JSON report
//!
//! Every failure aborts before anything is printed to stdout.

use super::models::DiffArgs;
use crate::aggregator::{load_snapshot, Snapshot};
use crate::diff::{generate_diff, DiffReport, SnapshotMetadata};
use crate::output::{render_terminal_diff, write_report};
use crate::utils::error::ConfigError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Validate diff arguments
///
/// **Public** - can be called before execute_diff for early validation
///
/// A negative diff threshold is accepted: it reports every shared stack,
/// equal counts included, which is what `--omitidentical` filters.
///
/// # Errors
/// * `ConfigError::MissingPath` - left or right path is empty
pub fn validate_args(args: &DiffArgs) -> Result<(), ConfigError> {
    if args.left.as_os_str().is_empty() {
        return Err(ConfigError::MissingPath { side: "left" });
    }

    if args.right.as_os_str().is_empty() {
        return Err(ConfigError::MissingPath { side: "right" });
    }

    Ok(())
}

/// Load, diff and rank both dumps
///
/// **Public** - everything `execute_diff` does except printing
///
/// The returned report already has `--omitidentical` applied.
pub fn build_report(args: &DiffArgs) -> Result<DiffReport> {
    validate_args(args)?;

    let left = load_snapshot(&args.left, args.over).context("Failed to load left dump")?;
    let right = load_snapshot(&args.right, args.over).context("Failed to load right dump")?;

    let result = generate_diff(&left, &right, args.diff);

    Ok(DiffReport::new(
        metadata(&args.left, &left),
        metadata(&args.right, &right),
        args.over,
        args.diff,
        args.omit_identical,
        result,
    ))
}

/// Execute the diff command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing input paths
/// * Unreadable input files
/// * Malformed records in either dump
/// * JSON report write errors
pub fn execute_diff(args: DiffArgs) -> Result<()> {
    let start_time = Instant::now();

    info!(
        "Diffing {} against {}",
        args.left.display(),
        args.right.display()
    );

    let report = build_report(&args)?;

    debug!(
        "Report: {} changed, {} left only, {} right only",
        report.result.changed.len(),
        report.result.left_only.len(),
        report.result.right_only.len()
    );

    for (i, pair) in report.result.changed.iter().take(3).enumerate() {
        debug!(
            "  {}. {} -> {} ({:+}): {}",
            i + 1,
            pair.left_count,
            pair.right_count,
            pair.delta(),
            pair.body.lines().next().unwrap_or_default()
        );
    }

    if let Some(path) = &args.output {
        write_report(&report, path).context("Failed to write diff report JSON")?;
        info!("✓ Diff report written to: {}", path.display());
    }

    print!("{}", render_terminal_diff(&report.result, args.omit_identical));

    let elapsed = start_time.elapsed();
    debug!("Diff completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Summarize a loaded snapshot for the report
///
/// **Private** - internal helper for build_report
fn metadata(path: &Path, snapshot: &Snapshot) -> SnapshotMetadata {
    SnapshotMetadata::new(path, snapshot.records_parsed(), snapshot.len())
}
