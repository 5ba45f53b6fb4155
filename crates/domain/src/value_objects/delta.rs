//! Typed delta and override bags for timestamp arithmetic

use serde::{Deserialize, Serialize};

use crate::value_objects::Span;

/// Signed per-span amounts for [`Timestamp::add`] and
/// [`Timestamp::subtract`].
///
/// This is a closed set of recognized spans, so an unknown span key cannot
/// reach the arithmetic at all. Weeks are folded into days when applied.
///
/// [`Timestamp::add`]: crate::entities::Timestamp::add
/// [`Timestamp::subtract`]: crate::entities::Timestamp::subtract
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanDeltas {
    /// Years to add
    pub years: i64,
    /// Months to add
    pub months: i64,
    /// Weeks to add (applied as 7 days each)
    pub weeks: i64,
    /// Days to add
    pub days: i64,
    /// Hours to add
    pub hours: i64,
}

impl SpanDeltas {
    /// The all-zero delta
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A delta of `amount` in a single span
    #[must_use]
    pub const fn for_span(span: Span, amount: i64) -> Self {
        let mut deltas = Self {
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
        };
        match span {
            Span::Day => deltas.days = amount,
            Span::Week => deltas.weeks = amount,
            Span::Month => deltas.months = amount,
            Span::Year => deltas.years = amount,
            Span::Hour => deltas.hours = amount,
        }
        deltas
    }

    /// Set the year delta
    #[must_use]
    pub const fn with_years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }

    /// Set the month delta
    #[must_use]
    pub const fn with_months(mut self, months: i64) -> Self {
        self.months = months;
        self
    }

    /// Set the week delta
    #[must_use]
    pub const fn with_weeks(mut self, weeks: i64) -> Self {
        self.weeks = weeks;
        self
    }

    /// Set the day delta
    #[must_use]
    pub const fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Set the hour delta
    #[must_use]
    pub const fn with_hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    /// The delta with every amount negated
    #[must_use]
    pub const fn negated(&self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            weeks: -self.weeks,
            days: -self.days,
            hours: -self.hours,
        }
    }

    /// Whether applying this delta changes nothing
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0 && self.hours == 0
    }
}

/// Explicit calendar-field overrides for [`Timestamp::set`].
///
/// Unset fields keep their current value; the result is renormalized, so an
/// out-of-range override (day 40, hour 30) carries into the next unit.
///
/// [`Timestamp::set`]: crate::entities::Timestamp::set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverrides {
    /// Replacement year
    pub year: Option<i32>,
    /// Replacement month (1-12 for in-range values)
    pub month: Option<u32>,
    /// Replacement day of month
    pub day: Option<u32>,
    /// Replacement hour
    pub hour: Option<u32>,
    /// Replacement minute
    pub minute: Option<u32>,
}

impl FieldOverrides {
    /// The empty override set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the year
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Override the month
    #[must_use]
    pub const fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Override the day of month
    #[must_use]
    pub const fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Override the hour
    #[must_use]
    pub const fn with_hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Override the minute
    #[must_use]
    pub const fn with_minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }
}
