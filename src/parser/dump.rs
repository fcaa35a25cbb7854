//! Parser for text goroutine dumps.
//!
//! A dump is a sequence of records separated by a blank line:
//!
//! ```text
//! goroutine profile: total 27
//! 12 @ 0x43a1c5 0x44b0f2
//! #	0x44b0f1	main.worker+0x31	/src/main.go:42
//!
//! 3 @ 0x43a1c5 0x4079d3
//! #	0x4079d2	main.main+0x52	/src/main.go:17
//! ```
//!
//! The leading `goroutine ...` line is discarded, the integer before ` @ ` is
//! the number of goroutines sharing the stack and everything after it is the
//! stack body.

use super::schema::StackRecord;
use crate::utils::config::{COUNT_DELIMITER, HEADER_PREFIX};
use crate::utils::error::ParseError;
use log::debug;

/// Parse raw dump text into `(count, body)` records
///
/// **Public** - main entry point for parsing
///
/// Pieces that are blank (after removing an optional header line) are
/// skipped, so an empty dump yields an empty vector. Line terminators are
/// stripped from both ends of each piece so the last record of a file
/// compares equal to the same record elsewhere; bytes inside a body are
/// kept as they are.
///
/// # Errors
/// * `ParseError::InvalidCount` - count token is not a valid integer
/// * `ParseError::MissingDelimiter` - no ` @ ` after the count
pub fn parse_dump(raw: &str) -> Result<Vec<StackRecord>, ParseError> {
    let pieces = split_records(raw);
    let mut records = Vec::with_capacity(pieces.len());

    for (index, piece) in pieces.iter().enumerate() {
        let piece = strip_header(piece.trim_start_matches(LINE_TERMINATORS))
            .trim_end_matches(LINE_TERMINATORS);
        if piece.trim().is_empty() {
            continue;
        }

        records.push(parse_record(index + 1, piece)?);
    }

    debug!("Parsed {} records from {} pieces", records.len(), pieces.len());

    Ok(records)
}

/// Parse a single `<count> @ <body>` record
///
/// **Public** - exposed for callers that already split their input
///
/// `record` is the 1-based position of the piece, used in error messages.
pub fn parse_record(record: usize, piece: &str) -> Result<StackRecord, ParseError> {
    let (token, body) = match piece.split_once(COUNT_DELIMITER) {
        Some((token, body)) => (token, Some(body)),
        None => (piece, None),
    };

    let count = token
        .trim()
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidCount {
            record,
            token: token.lines().next().unwrap_or_default().to_string(),
            source,
        })?;

    let body = body.ok_or(ParseError::MissingDelimiter { record })?;

    Ok(StackRecord::new(count, body))
}

/// Drop the first line of a piece if it is a dump header
///
/// **Private** - internal helper for parse_dump
fn strip_header(piece: &str) -> &str {
    if !piece.starts_with(HEADER_PREFIX) {
        return piece;
    }

    match piece.split_once('\n') {
        Some((_, rest)) => rest,
        None => "",
    }
}

const LINE_TERMINATORS: [char; 2] = ['\r', '\n'];

/// Split dump text on blank lines (`\n` or `\r\n`)
///
/// **Private** - internal helper for parse_dump
///
/// Each piece keeps the line terminator of its last line; the blank line
/// itself is dropped.
fn split_records(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if line == "\n" || line == "\r\n" {
            pieces.push(&text[start..line_start]);
            start = offset;
        }
    }

    pieces.push(&text[start..]);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_header() {
        assert_eq!(strip_header("goroutine profile: total 3\n3 @ foo"), "3 @ foo");
        assert_eq!(strip_header("goroutine profile: total 3"), "");
        assert_eq!(strip_header("3 @ foo"), "3 @ foo");
    }

    #[test]
    fn test_parse_record_multiline_body() {
        let record = parse_record(1, "4 @ 0x1 0x2\n#\t0x1\tmain.run+0x10").unwrap();
        assert_eq!(record.count, 4);
        assert_eq!(record.body, "0x1 0x2\n#\t0x1\tmain.run+0x10");
    }

    #[test]
    fn test_parse_record_negative_count() {
        let record = parse_record(1, "-2 @ foo").unwrap();
        assert_eq!(record.count, -2);
    }

    #[test]
    fn test_parse_record_invalid_count() {
        let err = parse_record(3, "twelve @ foo").unwrap_err();
        match err {
            ParseError::InvalidCount { record, token, .. } => {
                assert_eq!(record, 3);
                assert_eq!(token, "twelve");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_record_missing_delimiter() {
        let err = parse_record(2, "12").unwrap_err();
        assert!(matches!(err, ParseError::MissingDelimiter { record: 2 }));
    }

    #[test]
    fn test_split_records_lf() {
        assert_eq!(split_records("1 @ a\n\n2 @ b"), vec!["1 @ a\n", "2 @ b"]);
        assert_eq!(split_records("1 @ a\n\n\n2 @ b"), vec!["1 @ a\n", "", "2 @ b"]);
        assert_eq!(split_records(""), vec![""]);
    }

    #[test]
    fn test_split_records_crlf_keeps_inner_bytes() {
        assert_eq!(
            split_records("1 @ a\r\nb\r\n\r\n2 @ c"),
            vec!["1 @ a\r\nb\r\n", "2 @ c"]
        );
    }
}
