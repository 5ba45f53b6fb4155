//! Source position value object - where a timestamp was found in a line

use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a matched timestamp in its source text.
///
/// Line and columns are 1-based; columns are inclusive byte columns covering
/// the whole marker pair (`<...>` or `[...]`). The engine only constructs
/// and stores these, it never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    line: usize,
    start_col: usize,
    end_col: usize,
}

impl SourcePosition {
    /// Create a position from a 1-based line and inclusive column range
    #[must_use]
    pub const fn new(line: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            line,
            start_col,
            end_col,
        }
    }

    /// 1-based line number
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the opening marker
    #[must_use]
    pub const fn start_col(&self) -> usize {
        self.start_col
    }

    /// 1-based column of the closing marker (inclusive)
    #[must_use]
    pub const fn end_col(&self) -> usize {
        self.end_col
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.line, self.start_col, self.end_col)
    }
}
