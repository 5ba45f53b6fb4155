//! Comparisons and calendar queries for [`Timestamp`]

use chrono::{Datelike, NaiveDateTime, Weekday};

use super::Timestamp;
use crate::value_objects::{FieldOverrides, Span, SpanDeltas, WeekConfig};

impl Timestamp {
    /// Instant used for comparisons: exact, or bucketed to the start of a
    /// span when one is given
    fn bucketed_instant(&self, span: Option<Span>, config: &WeekConfig) -> NaiveDateTime {
        span.map_or_else(|| self.instant(), |span| self.start_of(span, config).instant())
    }

    /// Equality of instants, optionally bucketed to a span
    #[must_use]
    pub fn is_same(&self, other: &Self, span: Option<Span>, config: &WeekConfig) -> bool {
        self.bucketed_instant(span, config) == other.bucketed_instant(span, config)
    }

    /// Whether this instant is at or after the other's
    #[must_use]
    pub fn is_same_or_after(&self, other: &Self, span: Option<Span>, config: &WeekConfig) -> bool {
        self.bucketed_instant(span, config) >= other.bucketed_instant(span, config)
    }

    /// Whether this instant is at or before the other's
    #[must_use]
    pub fn is_same_or_before(&self, other: &Self, span: Option<Span>, config: &WeekConfig) -> bool {
        self.bucketed_instant(span, config) <= other.bucketed_instant(span, config)
    }

    /// Strictly before; the negation of [`Self::is_same_or_after`], so an
    /// exact tie is never both before and after
    #[must_use]
    pub fn is_before(&self, other: &Self, span: Option<Span>, config: &WeekConfig) -> bool {
        !self.is_same_or_after(other, span, config)
    }

    /// Strictly after; the negation of [`Self::is_same_or_before`]
    #[must_use]
    pub fn is_after(&self, other: &Self, span: Option<Span>, config: &WeekConfig) -> bool {
        !self.is_same_or_before(other, span, config)
    }

    /// Inclusive containment. With a span, the window widens to
    /// `from.start_of(span)` through `to.end_of(span)`.
    #[must_use]
    pub fn is_between(
        &self,
        from: &Self,
        to: &Self,
        span: Option<Span>,
        config: &WeekConfig,
    ) -> bool {
        let (low, high) = span.map_or_else(
            || (from.instant(), to.instant()),
            |span| (from.start_of(span, config).instant(), to.end_of(span, config).instant()),
        );
        self.instant() >= low && self.instant() <= high
    }

    /// Whether this value falls on the current calendar date.
    ///
    /// Memoized per instance: arithmetic yields new instances, so a value's
    /// calendar date cannot change once computed.
    #[must_use]
    pub fn is_today(&self) -> bool {
        *self
            .today_memo
            .get_or_init(|| self.date() == Self::now().date())
    }

    /// Whether this instant lies before the current instant
    #[must_use]
    pub fn is_past(&self) -> bool {
        self.instant() < Self::now().instant()
    }

    /// Whether this instant lies after the current instant
    #[must_use]
    pub fn is_future(&self) -> bool {
        self.instant() > Self::now().instant()
    }

    /// Today, or any earlier instant
    #[must_use]
    pub fn is_today_or_past(&self) -> bool {
        self.is_today() || self.is_past()
    }

    /// Today, or any later instant
    #[must_use]
    pub fn is_today_or_future(&self) -> bool {
        self.is_today() || self.is_future()
    }

    /// Whole-day difference `self - other` between start-of-day instants,
    /// floored toward negative infinity
    #[must_use]
    pub fn diff(&self, other: &Self) -> i64 {
        let seconds = (self.start_of_day().instant() - other.start_of_day().instant())
            .num_seconds();
        seconds.div_euclid(86_400)
    }

    /// Human-readable day distance from `from` (default: now):
    /// `"Today"`, `"In <n> d."` or `"<n> d. ago"`
    #[must_use]
    pub fn humanize(&self, from: Option<&Self>) -> String {
        let days = from.map_or_else(|| self.diff(&Self::now()), |from| self.diff(from));
        match days.cmp(&0) {
            std::cmp::Ordering::Equal => "Today".to_string(),
            std::cmp::Ordering::Less => format!("{} d. ago", -days),
            std::cmp::Ordering::Greater => format!("In {days} d."),
        }
    }

    /// One value per calendar day from `self` (inclusive) up to, but not
    /// including, `other`'s instant. Empty when `self` is not before
    /// `other`.
    #[must_use]
    pub fn get_range_until(&self, other: &Self) -> Vec<Self> {
        let step = SpanDeltas::new().with_days(1);
        let mut range = Vec::new();
        let mut current = self.clone();
        while current.instant() < other.instant() {
            range.push(current.clone());
            current = current.add(&step);
        }
        range
    }

    /// Host-calendar weekday of this value
    #[must_use]
    pub fn get_weekday(&self) -> Weekday {
        self.instant().weekday()
    }

    /// ISO weekday number, Monday = 1 through Sunday = 7
    #[must_use]
    pub fn get_isoweekday(&self) -> u32 {
        self.get_weekday().number_from_monday()
    }

    /// Move onto the given ISO weekday.
    ///
    /// Targets at or before the current weekday move backwards within the
    /// week. Later targets move forward when `future` is set; otherwise the
    /// value retreats a full week first and lands on the target weekday of
    /// the previous week. Targets are clamped to 1..=7.
    #[must_use]
    pub fn set_isoweekday(&self, iso_weekday: u32, future: bool) -> Self {
        let target = i64::from(iso_weekday.clamp(1, 7));
        let current = i64::from(self.get_isoweekday());

        if target <= current {
            self.subtract(&SpanDeltas::new().with_days(current - target))
        } else if future {
            self.add(&SpanDeltas::new().with_days(target - current))
        } else {
            self.subtract(&SpanDeltas::new().with_weeks(1))
                .add(&SpanDeltas::new().with_days(target - current))
        }
    }

    /// Saturday or Sunday
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        self.get_isoweekday() >= 6
    }

    /// 1-based week number, counted with this engine's own week arithmetic:
    /// week 1 opens at the start of the year and each added week opens the
    /// next. Deliberately iterative so the result agrees with the `week`
    /// span semantics rather than ISO-8601 numbering.
    #[must_use]
    pub fn get_week_number(&self) -> u32 {
        let target = self.start_of_day();
        let mut cursor = self
            .set(&FieldOverrides::new().with_month(1).with_day(1))
            .start_of_day();
        let mut week = 1;
        loop {
            let next = cursor.add(&SpanDeltas::new().with_weeks(1));
            if next.instant() > target.instant() {
                return week;
            }
            cursor = next;
            week += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> Timestamp {
        Timestamp::from_ymd(year, month, day).unwrap()
    }

    fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Timestamp {
        Timestamp::from_ymd_hm(year, month, day, hour, minute).unwrap()
    }

    #[test]
    fn exact_comparisons() {
        let config = WeekConfig::default();
        let earlier = datetime(2024, 6, 10, 9, 0);
        let later = datetime(2024, 6, 10, 14, 0);

        assert!(earlier.is_before(&later, None, &config));
        assert!(later.is_after(&earlier, None, &config));
        assert!(!earlier.is_same(&later, None, &config));
        assert!(earlier.is_same_or_before(&later, None, &config));
        assert!(later.is_same_or_after(&earlier, None, &config));
    }

    #[test]
    fn ties_are_neither_before_nor_after() {
        let config = WeekConfig::default();
        let a = datetime(2024, 6, 10, 9, 0);
        let b = datetime(2024, 6, 10, 9, 0);

        assert!(a.is_same(&b, None, &config));
        assert!(!a.is_before(&b, None, &config));
        assert!(!a.is_after(&b, None, &config));
        assert!(a.is_same_or_before(&b, None, &config));
        assert!(a.is_same_or_after(&b, None, &config));
    }

    #[test]
    fn span_bucketed_comparisons() {
        let config = WeekConfig::default();
        let morning = datetime(2024, 6, 10, 9, 0);
        let evening = datetime(2024, 6, 10, 21, 0);

        assert!(morning.is_same(&evening, Some(Span::Day), &config));
        assert!(!morning.is_before(&evening, Some(Span::Day), &config));

        let next_month = date(2024, 7, 1);
        assert!(morning.is_before(&next_month, Some(Span::Month), &config));
        assert!(morning.is_same(&date(2024, 6, 28), Some(Span::Month), &config));
    }

    #[test]
    fn week_bucketed_comparison_respects_config() {
        // Sunday 2024-06-09 and Monday 2024-06-10.
        let sunday = date(2024, 6, 9);
        let monday = date(2024, 6, 10);

        let monday_weeks = WeekConfig::default();
        assert!(!sunday.is_same(&monday, Some(Span::Week), &monday_weeks));

        let sunday_weeks = WeekConfig::new(Weekday::Sun, Weekday::Sat, 14);
        assert!(sunday.is_same(&monday, Some(Span::Week), &sunday_weeks));
    }

    #[test]
    fn is_between_is_inclusive() {
        let config = WeekConfig::default();
        let from = date(2024, 6, 10);
        let to = date(2024, 6, 20);

        assert!(date(2024, 6, 10).is_between(&from, &to, None, &config));
        assert!(date(2024, 6, 15).is_between(&from, &to, None, &config));
        assert!(date(2024, 6, 20).is_between(&from, &to, None, &config));
        assert!(!date(2024, 6, 21).is_between(&from, &to, None, &config));
        assert!(!date(2024, 6, 9).is_between(&from, &to, None, &config));
    }

    #[test]
    fn is_between_with_span_widens_window() {
        let config = WeekConfig::default();
        let from = date(2024, 6, 10);
        let to = date(2024, 6, 20);

        // Late on the 20th is outside the exact window but inside the
        // day-bucketed one.
        let late = datetime(2024, 6, 20, 22, 0);
        assert!(!late.is_between(&from, &to, None, &config));
        assert!(late.is_between(&from, &to, Some(Span::Day), &config));
    }

    #[test]
    fn diff_counts_whole_days() {
        let a = date(2024, 3, 20);
        let b = date(2024, 3, 15);
        assert_eq!(a.diff(&b), 5);
        assert_eq!(b.diff(&a), -5);
        assert_eq!(a.diff(&a), 0);
    }

    #[test]
    fn diff_ignores_time_of_day() {
        let late = datetime(2024, 3, 16, 23, 30);
        let early = datetime(2024, 3, 15, 0, 5);
        assert_eq!(late.diff(&early), 1);
        assert_eq!(early.diff(&late), -1);
    }

    #[test]
    fn humanize_relative_to_anchor() {
        let anchor = date(2024, 6, 10);
        assert_eq!(date(2024, 6, 10).humanize(Some(&anchor)), "Today");
        assert_eq!(date(2024, 6, 13).humanize(Some(&anchor)), "In 3 d.");
        assert_eq!(date(2024, 6, 3).humanize(Some(&anchor)), "7 d. ago");
    }

    #[test]
    fn humanize_defaults_to_now() {
        assert_eq!(Timestamp::today().humanize(None), "Today");
    }

    #[test]
    fn range_until_excludes_end() {
        let from = date(2024, 6, 10);
        let to = date(2024, 6, 13);
        let range = from.get_range_until(&to);

        assert_eq!(range.len(), 3);
        assert_eq!(range[0].to_date_string(), "2024-06-10");
        assert_eq!(range[2].to_date_string(), "2024-06-12");
    }

    #[test]
    fn range_until_is_empty_when_not_before() {
        let from = date(2024, 6, 10);
        assert!(from.get_range_until(&from).is_empty());
        assert!(from.get_range_until(&date(2024, 6, 1)).is_empty());
    }

    #[test]
    fn weekday_numbers() {
        // 2024-06-10 is a Monday, 2024-06-16 a Sunday.
        assert_eq!(date(2024, 6, 10).get_weekday(), Weekday::Mon);
        assert_eq!(date(2024, 6, 10).get_isoweekday(), 1);
        assert_eq!(date(2024, 6, 16).get_isoweekday(), 7);
    }

    #[test]
    fn set_isoweekday_moves_backward_for_earlier_targets() {
        // Thursday 2024-06-13 -> Monday of the same week.
        let thursday = date(2024, 6, 13);
        assert_eq!(thursday.set_isoweekday(1, false).to_date_string(), "2024-06-10");
        // Same-day target stays put.
        assert_eq!(thursday.set_isoweekday(4, false).to_date_string(), "2024-06-13");
    }

    #[test]
    fn set_isoweekday_forward_needs_future_flag() {
        let thursday = date(2024, 6, 13);
        // Forward within the week.
        assert_eq!(thursday.set_isoweekday(6, true).to_date_string(), "2024-06-15");
        // Without the flag the value lands in the previous week.
        assert_eq!(thursday.set_isoweekday(6, false).to_date_string(), "2024-06-08");
    }

    #[test]
    fn weekend_detection() {
        assert!(!date(2024, 6, 14).is_weekend());
        assert!(date(2024, 6, 15).is_weekend());
        assert!(date(2024, 6, 16).is_weekend());
    }

    #[test]
    fn week_numbers_count_from_january_first() {
        assert_eq!(date(2024, 1, 1).get_week_number(), 1);
        assert_eq!(date(2024, 1, 7).get_week_number(), 1);
        assert_eq!(date(2024, 1, 8).get_week_number(), 2);
        assert_eq!(date(2024, 12, 31).get_week_number(), 53);
    }

    #[test]
    fn week_number_ignores_time_of_day() {
        assert_eq!(datetime(2024, 1, 8, 23, 30).get_week_number(), 2);
    }

    #[test]
    fn today_queries_track_the_clock() {
        let today = Timestamp::today();
        assert!(today.is_today());
        assert!(today.is_today_or_past());
        assert!(today.is_today_or_future());

        let tomorrow = today.add(&SpanDeltas::new().with_days(1));
        assert!(!tomorrow.is_today());
        assert!(tomorrow.is_future());
        assert!(!tomorrow.is_past());

        let yesterday = today.subtract(&SpanDeltas::new().with_days(1));
        assert!(yesterday.is_past());
        assert!(!yesterday.is_future());
    }

    #[test]
    fn memoized_today_answer_is_stable() {
        let today = Timestamp::today();
        let first = today.is_today();
        assert_eq!(today.is_today(), first);
    }
}
