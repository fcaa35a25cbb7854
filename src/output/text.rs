//! Terminal output rendering for diff results.
//!
//! One line per changed stack (`Left: L Right: R @ body`), then the
//! left-only and right-only sections, each introduced by a header and only
//! printed when non-empty.

use crate::diff::DiffResult;
use crate::parser::StackRecord;
use crate::utils::config::{LEFT_ONLY_HEADER, RIGHT_ONLY_HEADER};
use colored::*;

/// Render a ranked diff result for the terminal
///
/// Equal-count pairs are skipped when `omit_identical` is set.
pub fn render_terminal_diff(result: &DiffResult, omit_identical: bool) -> String {
    let mut out = String::new();

    for pair in result.visible_changed(omit_identical) {
        out.push_str(&format!("{pair}\n"));
    }

    out.push_str(&render_section(LEFT_ONLY_HEADER, &result.left_only));
    out.push_str(&render_section(RIGHT_ONLY_HEADER, &result.right_only));

    out
}

/// Header plus one line per record, or nothing when there are no records
fn render_section(header: &str, records: &[StackRecord]) -> String {
    let mut out = String::new();

    if records.is_empty() {
        return out;
    }

    out.push_str(&format!("{}\n", header.bold()));
    for record in records {
        out.push_str(&format!("{record}\n"));
    }
    out
}
