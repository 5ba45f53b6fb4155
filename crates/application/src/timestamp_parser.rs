//! Timestamp body grammar
//!
//! Parses the portion between the markers: a leading `YYYY-M-DD` date, then
//! any mix of an optional weekday label, an optional `H:MM` time and any
//! number of adjustment tokens, classified by shape rather than position.
//! Parsing never fails; a body that does not start with a date yields a
//! "now" value carrying the caller's context.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use domain::{SourcePosition, Timestamp, TimestampKind};

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{2})(?:\s+|$)").expect("valid date regex"));
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}$").expect("valid time regex"));
static WEEKDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{3,}$").expect("valid weekday regex"));
static ADJUSTMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[.+\-]+\d+[hdwmy]?$").expect("valid adjustment regex"));

/// Caller-supplied context for a parse: the surrounding markers decide
/// `active`, the surrounding keyword decides `kind`, and the scanner knows
/// the position.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    /// Semantic kind from the surrounding keyword
    pub kind: TimestampKind,
    /// Whether the match used `<...>` markers
    pub active: bool,
    /// Where the match sits in its source line
    pub position: Option<SourcePosition>,
}

impl ParseContext {
    /// Context for a bare active timestamp
    #[must_use]
    pub fn active() -> Self {
        Self {
            kind: TimestampKind::default(),
            active: true,
            position: None,
        }
    }

    /// Context for a bare inactive timestamp
    #[must_use]
    pub fn inactive() -> Self {
        Self {
            kind: TimestampKind::default(),
            active: false,
            position: None,
        }
    }
}

/// Parse a timestamp body into a domain value.
///
/// Tokens after the date are independent of order: the first alphabetic
/// token of three or more letters is the weekday label, the first `H:MM`
/// token is the time, and every adjustment-shaped token accumulates in
/// source order. Anything else is ignored. Never returns an error; the
/// worst case is the "now" fallback.
#[must_use]
pub fn parse_timestamp(body: &str, context: ParseContext) -> Timestamp {
    let trimmed = body.trim();

    let Some((date, rest)) = leading_date(trimmed) else {
        debug!(body = %trimmed, "body does not start with a date, falling back to now");
        return apply_context(Timestamp::now(), context);
    };

    let mut weekday_name: Option<&str> = None;
    let mut time: Option<NaiveTime> = None;
    let mut adjustments: Vec<String> = Vec::new();

    for token in rest.split_whitespace() {
        if time.is_none() && TIME_RE.is_match(token) {
            time = parse_time(token);
        } else if ADJUSTMENT_RE.is_match(token) {
            adjustments.push(token.to_string());
        } else if weekday_name.is_none() && WEEKDAY_RE.is_match(token) {
            weekday_name = Some(token);
        }
    }

    let mut timestamp = match time {
        Some(time) => Timestamp::from_datetime(date.and_time(time)),
        None => Timestamp::from_date(date),
    };
    if let Some(weekday_name) = weekday_name {
        timestamp = timestamp.with_weekday_name(weekday_name);
    }
    timestamp = apply_context(timestamp.with_adjustments(adjustments), context);

    debug!(body = %trimmed, timestamp = %timestamp, "parsed timestamp body");
    timestamp
}

/// The `YYYY-M-DD` prefix as a calendar date plus the remaining body, if
/// the body has one. Numerically impossible dates (month 13, day 99) fail
/// here and take the fallback path with everything else.
fn leading_date(body: &str) -> Option<(NaiveDate, &str)> {
    let caps = DATE_RE.captures(body)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    let rest = caps.get(0).map_or("", |matched| &body[matched.end()..]);
    NaiveDate::from_ymd_opt(year, month, day).map(|date| (date, rest))
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    let (hour, minute) = token.split_once(':')?;
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

fn apply_context(timestamp: Timestamp, context: ParseContext) -> Timestamp {
    let timestamp = timestamp
        .with_kind(context.kind)
        .with_active(context.active);
    match context.position {
        Some(position) => timestamp.with_source_position(position),
        None => timestamp,
    }
}
