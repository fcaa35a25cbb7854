//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors in the user-supplied configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No {side} file specified")]
    MissingPath { side: &'static str },
}

/// Errors that can occur while parsing a stack dump
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Record {record}: invalid integer '{token}': {source}")]
    InvalidCount {
        record: usize,
        token: String,
        source: ParseIntError,
    },

    #[error("Record {record}: missing ' @ ' between count and stack")]
    MissingDelimiter { record: usize },
}

/// Errors that can occur while loading a dump file into a snapshot
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Couldn't read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
