//! Property-based tests for the timestamp engine
//!
//! These tests use proptest to verify calendar invariants across many random
//! inputs.

use chrono::{Datelike, NaiveDate};
use domain::{Span, SpanDeltas, Timestamp, WeekConfig};
use proptest::prelude::*;

fn arbitrary_timestamp() -> impl Strategy<Value = Timestamp> {
    (2000i32..=2100, 1u32..=12, 1u32..=31, 0u32..=23, 0u32..=59).prop_filter_map(
        "day must exist in month",
        |(year, month, day, hour, minute)| {
            Timestamp::from_ymd_hm(year, month, day, hour, minute).ok()
        },
    )
}

fn arbitrary_span() -> impl Strategy<Value = Span> {
    prop_oneof![
        Just(Span::Day),
        Just(Span::Week),
        Just(Span::Month),
        Just(Span::Year),
        Just(Span::Hour),
    ]
}

// ============================================================================
// Normalization Properties
// ============================================================================

mod normalization_tests {
    use super::*;

    proptest! {
        #[test]
        fn start_of_is_idempotent(
            timestamp in arbitrary_timestamp(),
            span in arbitrary_span()
        ) {
            let config = WeekConfig::default();
            let once = timestamp.start_of(span, &config);
            let twice = once.start_of(span, &config);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn end_of_is_idempotent(
            timestamp in arbitrary_timestamp(),
            span in arbitrary_span()
        ) {
            let config = WeekConfig::default();
            let once = timestamp.end_of(span, &config);
            let twice = once.end_of(span, &config);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn end_of_month_matches_actual_month_length(
            year in 2000i32..=2100,
            month in 1u32..=12,
            day in 1u32..=28
        ) {
            let config = WeekConfig::default();
            let timestamp = Timestamp::from_ymd(year, month, day).unwrap();
            let end = timestamp.end_of(Span::Month, &config);

            // Derive the expected length independently via chrono.
            let first_of_next = if month == 12 {
                NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
            } else {
                NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
            };
            let expected_last = first_of_next.pred_opt().unwrap();

            prop_assert_eq!(end.date(), expected_last);
            prop_assert_eq!(end.hour(), 23);
            prop_assert_eq!(end.minute(), 59);
        }

        #[test]
        fn week_start_is_within_seven_days_on_the_configured_weekday(
            timestamp in arbitrary_timestamp()
        ) {
            let config = WeekConfig::default();
            let start = timestamp.start_of(Span::Week, &config);

            prop_assert_eq!(start.get_weekday(), config.week_start());
            prop_assert!(start.instant() <= timestamp.instant());
            prop_assert!(timestamp.diff(&start) < 7);
        }

        #[test]
        fn start_of_never_moves_forward(
            timestamp in arbitrary_timestamp(),
            span in arbitrary_span()
        ) {
            let config = WeekConfig::default();
            let start = timestamp.start_of(span, &config);
            prop_assert!(start.instant() <= timestamp.instant());
        }

        #[test]
        fn end_of_never_moves_backward(
            timestamp in arbitrary_timestamp(),
            span in arbitrary_span()
        ) {
            let config = WeekConfig::default();
            let end = timestamp.end_of(span, &config);
            prop_assert!(end.instant() >= timestamp.instant());
        }
    }
}

// ============================================================================
// Arithmetic Properties
// ============================================================================

mod arithmetic_tests {
    use super::*;

    proptest! {
        #[test]
        fn add_then_subtract_days_is_identity(
            timestamp in arbitrary_timestamp(),
            days in 0i64..=10_000
        ) {
            let deltas = SpanDeltas::new().with_days(days);
            let back = timestamp.add(&deltas).subtract(&deltas);
            prop_assert_eq!(back.instant(), timestamp.instant());
        }

        #[test]
        fn add_then_subtract_weeks_is_identity(
            timestamp in arbitrary_timestamp(),
            weeks in 0i64..=500
        ) {
            let deltas = SpanDeltas::new().with_weeks(weeks);
            let back = timestamp.add(&deltas).subtract(&deltas);
            prop_assert_eq!(back.instant(), timestamp.instant());
        }

        #[test]
        fn add_then_subtract_hours_is_identity(
            timestamp in arbitrary_timestamp(),
            hours in 0i64..=10_000
        ) {
            let deltas = SpanDeltas::new().with_hours(hours);
            let back = timestamp.add(&deltas).subtract(&deltas);
            prop_assert_eq!(back.instant(), timestamp.instant());
        }

        #[test]
        fn adding_a_week_is_seven_days(
            timestamp in arbitrary_timestamp()
        ) {
            let by_week = timestamp.add(&SpanDeltas::new().with_weeks(1));
            let by_days = timestamp.add(&SpanDeltas::new().with_days(7));
            prop_assert_eq!(by_week, by_days);
        }

        #[test]
        fn arithmetic_preserves_metadata(
            timestamp in arbitrary_timestamp(),
            days in -1000i64..=1000
        ) {
            let tagged = timestamp
                .with_active(false)
                .with_adjustments(vec!["+1w".to_string()]);
            let moved = tagged.add(&SpanDeltas::new().with_days(days));

            prop_assert_eq!(moved.is_active(), tagged.is_active());
            prop_assert_eq!(moved.kind(), tagged.kind());
            prop_assert_eq!(moved.adjustments(), tagged.adjustments());
            prop_assert_eq!(moved.is_date_only(), tagged.is_date_only());
        }
    }
}

// ============================================================================
// Comparison Properties
// ============================================================================

mod comparison_tests {
    use super::*;

    proptest! {
        #[test]
        fn diff_is_antisymmetric(
            a in arbitrary_timestamp(),
            b in arbitrary_timestamp()
        ) {
            prop_assert_eq!(a.diff(&b), -b.diff(&a));
        }

        #[test]
        fn exactly_one_of_before_same_after_holds(
            a in arbitrary_timestamp(),
            b in arbitrary_timestamp(),
            span in proptest::option::of(arbitrary_span())
        ) {
            let config = WeekConfig::default();
            let relations = [
                a.is_before(&b, span, &config),
                a.is_same(&b, span, &config),
                a.is_after(&b, span, &config),
            ];
            prop_assert_eq!(relations.iter().filter(|held| **held).count(), 1);
        }

        #[test]
        fn is_between_own_endpoints(
            a in arbitrary_timestamp(),
            b in arbitrary_timestamp()
        ) {
            let config = WeekConfig::default();
            let (from, to) = if a.instant() <= b.instant() { (&a, &b) } else { (&b, &a) };
            prop_assert!(from.is_between(from, to, None, &config));
            prop_assert!(to.is_between(from, to, None, &config));
        }

        #[test]
        fn range_until_length_matches_diff(
            timestamp in arbitrary_timestamp(),
            days in 1i64..=365
        ) {
            let target = timestamp.add(&SpanDeltas::new().with_days(days));
            let range = timestamp.get_range_until(&target);
            prop_assert_eq!(range.len() as i64, days);
        }
    }
}

// ============================================================================
// Weekday Properties
// ============================================================================

mod weekday_tests {
    use super::*;

    proptest! {
        #[test]
        fn isoweekday_matches_chrono(
            timestamp in arbitrary_timestamp()
        ) {
            let expected = timestamp.date().weekday().number_from_monday();
            prop_assert_eq!(timestamp.get_isoweekday(), expected);
        }

        #[test]
        fn set_isoweekday_lands_on_target(
            timestamp in arbitrary_timestamp(),
            target in 1u32..=7,
            future in any::<bool>()
        ) {
            let moved = timestamp.set_isoweekday(target, future);
            prop_assert_eq!(moved.get_isoweekday(), target);
            // Never more than a week away in either direction.
            prop_assert!(timestamp.diff(&moved).abs() < 7);
        }
    }
}
