use crate::utils::config::{DEFAULT_DIFF, DEFAULT_OMIT_IDENTICAL, DEFAULT_OVER};
use std::path::PathBuf;

/// Arguments for the diff command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct DiffArgs {
    /// Left stack dump to parse
    pub left: PathBuf,

    /// Right stack dump to parse
    pub right: PathBuf,

    /// Records with a goroutine count <= over are ignored
    pub over: i64,

    /// Shared stacks whose count changed by <= diff are not reported
    pub diff: i64,

    /// Hide shared stacks with equal counts on both sides
    pub omit_identical: bool,

    /// Optional path for a JSON report
    pub output: Option<PathBuf>,
}

impl Default for DiffArgs {
    fn default() -> Self {
        Self {
            left: PathBuf::new(),
            right: PathBuf::new(),
            over: DEFAULT_OVER,
            diff: DEFAULT_DIFF,
            omit_identical: DEFAULT_OMIT_IDENTICAL,
            output: None,
        }
    }
}
