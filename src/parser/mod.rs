//! Dump parsing and record definitions.
//!
//! This module handles:
//! - Splitting raw dump text into records
//! - Extracting the goroutine count and stack body of each record
//! - Defining the record types handed to the diff engine

pub mod dump;
pub mod schema;

// Re-export main types
pub use dump::{parse_dump, parse_record};
pub use schema::{PairedRecord, StackRecord};
