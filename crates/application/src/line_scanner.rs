//! Line scanner
//!
//! Applies the marker-delimited timestamp pattern across whole lines of
//! text. This is the only place that touches raw text positions; everything
//! inside the markers goes through [`parse_timestamp`].

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use domain::{SourcePosition, Timestamp, TimestampKind};

use crate::timestamp_parser::{ParseContext, parse_timestamp};

/// A marker pair around a body that starts with a date shape. The body may
/// not contain closing markers, which keeps matches non-overlapping.
static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[<\[]\d{4}-\d{1,2}-\d{2}[^>\]]*[>\]]").expect("valid marker regex"));

/// Find every timestamp in a line, in left-to-right source order.
///
/// `line_number` is 1-based and is only carried into the reported
/// positions. Matching advances a cursor past each match, so repeated
/// identical timestamps on one line each get their own columns. Lines
/// without timestamps yield an empty vec.
#[must_use]
pub fn scan_line(line: &str, line_number: usize) -> Vec<Timestamp> {
    let matches: Vec<Timestamp> = MARKER_RE
        .find_iter(line)
        .map(|matched| {
            let text = matched.as_str();
            let active = text.starts_with('<');
            // Strip the single-byte markers; columns are 1-based inclusive.
            let body = &text[1..text.len() - 1];
            let position = SourcePosition::new(line_number, matched.start() + 1, matched.end());
            parse_timestamp(
                body,
                ParseContext {
                    kind: TimestampKind::None,
                    active,
                    position: Some(position),
                },
            )
        })
        .collect();

    if !matches.is_empty() {
        debug!(line = line_number, count = matches.len(), "scanned line");
    }
    matches
}

/// Scan a whole text, line by line, with 1-based line numbers
#[must_use]
pub fn scan_text(text: &str) -> Vec<Timestamp> {
    text.lines()
        .enumerate()
        .flat_map(|(index, line)| scan_line(line, index + 1))
        .collect()
}
