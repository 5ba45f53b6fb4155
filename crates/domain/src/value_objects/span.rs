//! Span value object - calendar granularities for arithmetic and snapping

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A calendar granularity used as the unit for normalization and arithmetic.
///
/// Each span maps to the single-letter code used in adjustment tokens
/// (`+1w`, `-2d`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Span {
    /// A calendar day
    Day,
    /// A seven-day week
    Week,
    /// A calendar month
    Month,
    /// A calendar year
    Year,
    /// A clock hour
    Hour,
}

impl Span {
    /// Resolve a single-letter span code (`d`, `w`, `m`, `y`, `h`)
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'd' => Some(Self::Day),
            'w' => Some(Self::Week),
            'm' => Some(Self::Month),
            'y' => Some(Self::Year),
            'h' => Some(Self::Hour),
            _ => None,
        }
    }

    /// The single-letter code used in adjustment tokens
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Day => 'd',
            Self::Week => 'w',
            Self::Month => 'm',
            Self::Year => 'y',
            Self::Hour => 'h',
        }
    }

    /// The canonical span name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Hour => "hour",
        }
    }

    /// All spans, in adjustment-token code order
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Day, Self::Week, Self::Month, Self::Year, Self::Hour]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Span {
    type Err = DomainError;

    /// Accepts both single-letter codes and canonical names, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" => Ok(Self::Day),
            "w" | "week" => Ok(Self::Week),
            "m" | "month" => Ok(Self::Month),
            "y" | "year" => Ok(Self::Year),
            "h" | "hour" => Ok(Self::Hour),
            other => Err(DomainError::InvalidSpan(other.to_string())),
        }
    }
}
