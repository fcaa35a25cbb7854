//! Stackdiff
//!
//! Compare two goroutine stack dumps and report which stacks are shared
//! but changed in size, which appear only on the left, and which appear
//! only on the right.
//!
//! This crate provides the core implementation for the `stackdiff` CLI:
//! dump parsing, stack fingerprinting, threshold-filtered snapshots, the
//! three-way diff and severity ranking.
//!
//! ## Getting Started
//!
//! ```bash
//! curl -s 'localhost:6060/debug/pprof/goroutine?debug=1' > before.txt
//! curl -s 'localhost:6060/debug/pprof/goroutine?debug=1' > after.txt
//! stackdiff --left before.txt --right after.txt
//! ```

pub mod aggregator;
pub mod commands;
pub mod diff;
pub mod output;
pub mod parser;
pub mod utils;
