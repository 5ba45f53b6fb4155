//! Adjustment token value object - repeat and warning suffixes on timestamps

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;
use crate::value_objects::Span;

/// Token grammar: one or more sign characters, digits, optional span code.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([.+\-]+)(\d+)([hdwmy])?$").expect("hardcoded token pattern"));

/// A parsed adjustment token such as `+1w` or `-2d`.
///
/// Positive adjustments act as repeaters, negative ones as warning windows.
/// The amount is stored as a non-negative magnitude; the direction lives in
/// the `negative` flag. A token is negative iff its sign run contains `-`,
/// so the org-style restart markers `.+` and `++` still count as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adjustment {
    span: Span,
    amount: i64,
    negative: bool,
}

impl Adjustment {
    /// Create an adjustment from parts. The magnitude is taken as-is.
    #[must_use]
    pub const fn new(span: Span, amount: i64, negative: bool) -> Self {
        Self {
            span,
            amount,
            negative,
        }
    }

    /// The zero-day adjustment used as a lenient fallback. Applying it
    /// changes nothing.
    #[must_use]
    pub const fn noop() -> Self {
        Self::new(Span::Day, 0, false)
    }

    /// Parse a token, falling back to [`Self::noop`] when it does not match
    /// the grammar. The span code defaults to days when absent.
    #[must_use]
    pub fn parse_lenient(token: &str) -> Self {
        TOKEN_RE.captures(token.trim()).map_or_else(Self::noop, |caps| {
            let negative = caps[1].contains('-');
            // Absurdly long digit runs overflow to the no-op amount.
            let amount = caps[2].parse::<i64>().unwrap_or(0);
            let span = caps
                .get(3)
                .and_then(|m| m.as_str().chars().next())
                .and_then(Span::from_code)
                .unwrap_or(Span::Day);
            Self {
                span,
                amount,
                negative,
            }
        })
    }

    /// The span this adjustment applies to
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// The non-negative magnitude of the adjustment
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Whether the token's sign run contained `-`
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether applying this adjustment changes nothing
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.amount == 0
    }
}

impl fmt::Display for Adjustment {
    /// Renders the canonical token form, e.g. `+1w` or `-2d`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(f, "{sign}{}{}", self.amount, self.span.code())
    }
}

impl FromStr for Adjustment {
    type Err = DomainError;

    /// Strict counterpart of [`Adjustment::parse_lenient`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if TOKEN_RE.is_match(s.trim()) {
            Ok(Self::parse_lenient(s))
        } else {
            Err(DomainError::InvalidAdjustment(s.to_string()))
        }
    }
}
