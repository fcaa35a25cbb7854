//! Configuration and constants for the CLI.

/// Default minimum-count threshold: records with `count <= over` are dropped
pub const DEFAULT_OVER: i64 = 10;

/// Default minimum absolute count delta for a matched stack to be reported
pub const DEFAULT_DIFF: i64 = 5;

/// Equal-count matched stacks are hidden unless this is turned off
pub const DEFAULT_OMIT_IDENTICAL: bool = true;

/// Current JSON report schema version
pub const REPORT_VERSION: &str = "1.0.0";

// Dump grammar
// A record is "<count> @ <body>", records are separated by a blank line and
// the first record may be preceded by a "goroutine profile: total N" line.
pub const COUNT_DELIMITER: &str = " @ ";
pub const HEADER_PREFIX: &str = "goroutine";

// Section headers printed before unmatched stacks
pub const LEFT_ONLY_HEADER: &str = "Left not Right";
pub const RIGHT_ONLY_HEADER: &str = "Right not Left";
