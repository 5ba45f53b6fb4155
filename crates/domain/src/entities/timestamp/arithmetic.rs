//! Calendar arithmetic and span normalization for [`Timestamp`]
//!
//! All arithmetic goes through one normalization path: deltas and overrides
//! are applied to the calendar fields, then the instant is rebuilt with
//! overflow carried into the next unit (so Jan 31 plus one month lands in
//! early March, the way a `mktime`-style calendar resolves Feb 31). Results
//! outside the representable range leave the value unchanged; arithmetic
//! here is total.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::Timestamp;
use crate::value_objects::{Adjustment, FieldOverrides, Span, SpanDeltas, WeekConfig};

impl Timestamp {
    /// Add per-span amounts to the calendar fields and renormalize.
    ///
    /// Weeks are folded into days before application.
    #[must_use]
    pub fn add(&self, deltas: &SpanDeltas) -> Self {
        let year = i64::from(self.year()).saturating_add(deltas.years);
        let month = i64::from(self.month()).saturating_add(deltas.months);
        let day = i64::from(self.day())
            .saturating_add(deltas.days)
            .saturating_add(deltas.weeks.saturating_mul(7));
        let hour = i64::from(self.hour()).saturating_add(deltas.hours);
        let minute = i64::from(self.minute());

        normalize_fields(year, month, day, hour, minute)
            .map_or_else(|| self.clone(), |instant| self.with_instant(instant))
    }

    /// Subtract per-span amounts; the mirror of [`Self::add`]
    #[must_use]
    pub fn subtract(&self, deltas: &SpanDeltas) -> Self {
        self.add(&deltas.negated())
    }

    /// Replace individual calendar fields and renormalize.
    ///
    /// Out-of-range overrides carry like any other arithmetic result.
    #[must_use]
    pub fn set(&self, overrides: &FieldOverrides) -> Self {
        let year = overrides.year.map_or_else(|| i64::from(self.year()), i64::from);
        let month = overrides
            .month
            .map_or_else(|| i64::from(self.month()), i64::from);
        let day = overrides.day.map_or_else(|| i64::from(self.day()), i64::from);
        let hour = overrides
            .hour
            .map_or_else(|| i64::from(self.hour()), i64::from);
        let minute = overrides
            .minute
            .map_or_else(|| i64::from(self.minute()), i64::from);

        normalize_fields(year, month, day, hour, minute)
            .map_or_else(|| self.clone(), |instant| self.with_instant(instant))
    }

    /// Apply one textual adjustment token (`+1w`, `-2d`, ...).
    ///
    /// A malformed token is a no-op, not an error.
    #[must_use]
    pub fn adjust(&self, token: &str) -> Self {
        self.apply_adjustment(&Adjustment::parse_lenient(token))
    }

    /// Apply a parsed adjustment in its own direction
    #[must_use]
    pub fn apply_adjustment(&self, adjustment: &Adjustment) -> Self {
        if adjustment.is_noop() {
            return self.clone();
        }
        let deltas = SpanDeltas::for_span(adjustment.span(), adjustment.amount());
        if adjustment.is_negative() {
            self.subtract(&deltas)
        } else {
            self.add(&deltas)
        }
    }

    /// Snap to the first instant of the given span.
    ///
    /// The week case walks backwards one day at a time until it stands on
    /// the configured week-start weekday; that stays correct however the
    /// configured start relates to the calendar's own weekday numbering.
    #[must_use]
    pub fn start_of(&self, span: Span, config: &WeekConfig) -> Self {
        match span {
            Span::Day => self.start_of_day(),
            Span::Hour => self.with_instant(
                self.instant()
                    .with_minute(0)
                    .unwrap_or_else(|| self.instant()),
            ),
            Span::Month => self.set(&FieldOverrides::new().with_day(1)).start_of_day(),
            Span::Year => self
                .set(&FieldOverrides::new().with_month(1).with_day(1))
                .start_of_day(),
            Span::Week => {
                let mut current = self.start_of_day();
                while current.get_weekday() != config.week_start() {
                    current = current.adjust("-1d");
                }
                current
            }
        }
    }

    /// Snap to the last instant of the given span (minute resolution).
    ///
    /// The month case derives the month length instead of hard-coding it:
    /// first of next month, minus one day, end of that day.
    #[must_use]
    pub fn end_of(&self, span: Span, config: &WeekConfig) -> Self {
        match span {
            Span::Day => self.end_of_day(),
            Span::Hour => self.with_instant(
                self.instant()
                    .with_minute(59)
                    .unwrap_or_else(|| self.instant()),
            ),
            Span::Month => self
                .set(&FieldOverrides::new().with_day(1))
                .add(&SpanDeltas::for_span(Span::Month, 1))
                .adjust("-1d")
                .end_of_day(),
            Span::Year => self
                .set(&FieldOverrides::new().with_month(12).with_day(31))
                .end_of_day(),
            Span::Week => {
                let mut current = self.clone();
                while current.get_weekday() != config.week_end() {
                    current = current.adjust("+1d");
                }
                current.end_of_day()
            }
        }
    }

    /// Midnight of the same calendar date
    pub(crate) fn start_of_day(&self) -> Self {
        self.with_instant(self.instant().date().and_time(NaiveTime::MIN))
    }

    /// 23:59 of the same calendar date
    pub(crate) fn end_of_day(&self) -> Self {
        let end = NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN);
        self.with_instant(self.instant().date().and_time(end))
    }
}

/// Rebuild an instant from possibly out-of-range calendar fields.
///
/// Months fold into years first; days, hours and minutes are then applied
/// as offsets from the first midnight of that month, which carries any
/// overflow (day 0, day 32, hour 25, negative values) across unit
/// boundaries. `None` when the result falls outside chrono's range.
fn normalize_fields(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
) -> Option<NaiveDateTime> {
    let folded_year = year.checked_add((month - 1).div_euclid(12))?;
    let folded_month = (month - 1).rem_euclid(12) + 1;

    let year = i32::try_from(folded_year).ok()?;
    let month = u32::try_from(folded_month).ok()?;
    let first_midnight = NaiveDate::from_ymd_opt(year, month, 1)?.and_time(NaiveTime::MIN);

    first_midnight
        .checked_add_signed(Duration::try_days(day.checked_sub(1)?)?)?
        .checked_add_signed(Duration::try_hours(hour)?)?
        .checked_add_signed(Duration::try_minutes(minute)?)
}
