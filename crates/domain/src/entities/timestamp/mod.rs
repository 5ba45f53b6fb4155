//! Timestamp entity - an immutable calendar point with timestamp metadata
//!
//! A [`Timestamp`] couples a canonical instant (naive local date-time at
//! minute resolution) with the metadata carried by the textual notation:
//! active flag, semantic kind, optional weekday label, and raw adjustment
//! tokens. Every operation returns a new value; nothing mutates in place.

mod arithmetic;
mod queries;
mod repeats;

use std::fmt;
use std::sync::OnceLock;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::SourcePosition;

/// Semantic role of a timestamp within its originating context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimestampKind {
    /// Plain timestamp without a planning keyword
    #[default]
    None,
    /// Attached to a SCHEDULED keyword
    Scheduled,
    /// Attached to a DEADLINE keyword
    Deadline,
    /// Attached to a CLOSED keyword
    Closed,
}

impl TimestampKind {
    /// Whether this kind participates in deadline/scheduled adjustment
    #[must_use]
    pub const fn is_plannable(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Deadline)
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "Plain",
            Self::Scheduled => "Scheduled",
            Self::Deadline => "Deadline",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An immutable timestamp value.
///
/// The canonical representation is the `instant`; calendar fields (year,
/// month, day, hour, minute) are views over it, so the two can never
/// disagree. Arithmetic and normalization live in this module's
/// submodules and all follow the same copy-on-write contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timestamp {
    kind: TimestampKind,
    active: bool,
    date_only: bool,
    instant: NaiveDateTime,
    weekday_name: Option<String>,
    adjustments: Vec<String>,
    source_position: Option<SourcePosition>,
    /// Memoized `is_today` answer. A value's calendar date never changes
    /// after construction (arithmetic yields new instances), so the first
    /// computed answer stays valid. Lock-free and idempotent under races.
    #[serde(skip)]
    today_memo: OnceLock<bool>,
}

impl Timestamp {
    /// The current local instant, at minute resolution
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// The current local date, as a date-only value
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Build from a date-time; `date_only` starts out false
    #[must_use]
    pub fn from_datetime(instant: NaiveDateTime) -> Self {
        Self {
            kind: TimestampKind::default(),
            active: true,
            date_only: false,
            instant: truncate_to_minute(instant),
            weekday_name: None,
            adjustments: Vec::new(),
            source_position: None,
            today_memo: OnceLock::new(),
        }
    }

    /// Build from a bare date; `date_only` starts out true
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        let mut timestamp = Self::from_datetime(date.and_time(NaiveTime::MIN));
        timestamp.date_only = true;
        timestamp
    }

    /// Build a date-only value from explicit calendar fields
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_date)
            .ok_or_else(|| DomainError::InvalidDateTime(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Build a timed value from explicit calendar fields
    pub fn from_ymd_hm(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, DomainError> {
        let date = NaiveDate::from_ymd_opt(year, month, day);
        let time = NaiveTime::from_hms_opt(hour, minute, 0);
        match (date, time) {
            (Some(date), Some(time)) => Ok(Self::from_datetime(date.and_time(time))),
            _ => Err(DomainError::InvalidDateTime(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"
            ))),
        }
    }

    /// Set the semantic kind
    #[must_use]
    pub fn with_kind(mut self, kind: TimestampKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the active flag
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the date-only flag
    #[must_use]
    pub fn with_date_only(mut self, date_only: bool) -> Self {
        self.date_only = date_only;
        self
    }

    /// Attach the weekday label found in the source text
    #[must_use]
    pub fn with_weekday_name(mut self, weekday_name: impl Into<String>) -> Self {
        self.weekday_name = Some(weekday_name.into());
        self
    }

    /// Attach the raw adjustment tokens, in source order
    #[must_use]
    pub fn with_adjustments(mut self, adjustments: Vec<String>) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Attach the source position this value was found at
    #[must_use]
    pub fn with_source_position(mut self, position: SourcePosition) -> Self {
        self.source_position = Some(position);
        self
    }

    /// Semantic kind
    #[must_use]
    pub const fn kind(&self) -> TimestampKind {
        self.kind
    }

    /// Whether this is an active (`<...>`) timestamp
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether no time-of-day was specified
    #[must_use]
    pub const fn is_date_only(&self) -> bool {
        self.date_only
    }

    /// Canonical instant
    #[must_use]
    pub const fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// Calendar date view of the instant
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.instant.date()
    }

    /// Calendar year
    #[must_use]
    pub fn year(&self) -> i32 {
        self.instant.year()
    }

    /// Calendar month (1-12)
    #[must_use]
    pub fn month(&self) -> u32 {
        self.instant.month()
    }

    /// Day of month (1-31)
    #[must_use]
    pub fn day(&self) -> u32 {
        self.instant.day()
    }

    /// Hour of day (0-23)
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    /// Minute of hour (0-59)
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    /// Short weekday label: the one carried from the source text, or one
    /// derived from the instant when none was carried
    #[must_use]
    pub fn weekday_name(&self) -> String {
        self.weekday_name
            .clone()
            .unwrap_or_else(|| self.instant.format("%a").to_string())
    }

    /// Raw adjustment tokens in source order
    #[must_use]
    pub fn adjustments(&self) -> &[String] {
        &self.adjustments
    }

    /// Where this value was found in the source text, if it was parsed
    #[must_use]
    pub const fn source_position(&self) -> Option<&SourcePosition> {
        self.source_position.as_ref()
    }

    /// `YYYY-MM-DD` rendering of the calendar date
    #[must_use]
    pub fn to_date_string(&self) -> String {
        self.instant.format("%Y-%m-%d").to_string()
    }

    /// `HH:MM` rendering of the time-of-day
    #[must_use]
    pub fn to_time_string(&self) -> String {
        self.instant.format("%H:%M").to_string()
    }

    /// `YYYY-MM-DD HH:MM` rendering of the instant
    #[must_use]
    pub fn to_datetime_string(&self) -> String {
        format!("{} {}", self.to_date_string(), self.to_time_string())
    }

    /// The body between the markers: date, weekday label, time when one was
    /// specified, then the adjustment tokens in source order
    #[must_use]
    pub fn to_body_string(&self) -> String {
        let mut body = format!("{} {}", self.to_date_string(), self.weekday_name());
        if !self.date_only {
            body.push(' ');
            body.push_str(&self.to_time_string());
        }
        for adjustment in &self.adjustments {
            body.push(' ');
            body.push_str(adjustment);
        }
        body
    }

    /// Derive a new value around a moved instant. Carried metadata survives
    /// except the weekday label, which would go stale once the date moves.
    pub(crate) fn with_instant(&self, instant: NaiveDateTime) -> Self {
        Self {
            kind: self.kind,
            active: self.active,
            date_only: self.date_only,
            instant: truncate_to_minute(instant),
            weekday_name: None,
            adjustments: self.adjustments.clone(),
            source_position: self.source_position,
            today_memo: OnceLock::new(),
        }
    }
}

impl fmt::Display for Timestamp {
    /// Renders the wrapped textual form, e.g. `<2024-03-15 Fri 09:00 +1w>`
    /// for active values and `[2024-01-01 Mon]` for inactive ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.to_body_string();
        if self.active {
            write!(f, "<{body}>")
        } else {
            write!(f, "[{body}]")
        }
    }
}

impl PartialEq for Timestamp {
    /// Semantic equality; the `is_today` memo is invisible here.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.active == other.active
            && self.date_only == other.date_only
            && self.instant == other.instant
            && self.weekday_name == other.weekday_name
            && self.adjustments == other.adjustments
            && self.source_position == other.source_position
    }
}

impl Eq for Timestamp {}

/// The engine works at minute resolution; anything finer is dropped at
/// every construction site so instants stay comparable.
fn truncate_to_minute(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .with_second(0)
        .and_then(|truncated| truncated.with_nanosecond(0))
        .unwrap_or(instant)
}
