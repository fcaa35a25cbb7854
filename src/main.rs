//! Stackdiff CLI
//!
//! Compares two goroutine stack dumps and prints the stacks whose
//! goroutine counts changed, followed by the stacks found on only one side.

use anyhow::Result;
use clap::{ArgAction, Parser};
use env_logger::Env;
use std::path::PathBuf;

use stackdiff::commands::{execute_diff, DiffArgs};
use stackdiff::utils::config::{DEFAULT_DIFF, DEFAULT_OMIT_IDENTICAL, DEFAULT_OVER};

/// Stackdiff - compare two goroutine stack dumps
#[derive(Parser, Debug)]
#[command(name = "stackdiff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Left stacktrace file to parse
    #[arg(long)]
    left: Option<PathBuf>,

    /// Right stacktrace file to parse
    #[arg(long)]
    right: Option<PathBuf>,

    /// Don't show in output if # of goroutines <= over
    #[arg(long, env = "STACKDIFF_OVER", default_value_t = DEFAULT_OVER, allow_negative_numbers = true)]
    over: i64,

    /// Don't show in output if diff of # of goroutines <= diff
    #[arg(long, env = "STACKDIFF_DIFF", default_value_t = DEFAULT_DIFF, allow_negative_numbers = true)]
    diff: i64,

    /// Omit stacktraces that are identical between files
    #[arg(
        long,
        env = "STACKDIFF_OMIT_IDENTICAL",
        default_value_t = DEFAULT_OMIT_IDENTICAL,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    omitidentical: bool,

    /// Write the diff as a JSON report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Missing paths are reported by validate_args, not by clap
    let args = DiffArgs {
        left: cli.left.unwrap_or_default(),
        right: cli.right.unwrap_or_default(),
        over: cli.over,
        diff: cli.diff,
        omit_identical: cli.omitidentical,
        output: cli.output,
    };

    execute_diff(args)
}
