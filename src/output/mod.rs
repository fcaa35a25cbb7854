//! Output writers for diff results.
//!
//! This module handles presenting a diff:
//! - Plain text lines for the terminal
//! - JSON reports on disk

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report};
pub use text::render_terminal_diff;
