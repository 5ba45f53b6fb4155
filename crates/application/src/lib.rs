//! Application layer - parsing services over the timestamp domain
//!
//! Recognizes the textual timestamp notation inside free-form text and
//! turns matches into domain values. The domain crate owns the value type
//! and its calendar arithmetic; this layer owns the grammar.

pub mod line_scanner;
pub mod timestamp_parser;

pub use line_scanner::{scan_line, scan_text};
pub use timestamp_parser::{ParseContext, parse_timestamp};
