//! Repeater projection and deadline/scheduled warning adjustment

use super::{Timestamp, TimestampKind};
use crate::value_objects::{Adjustment, Span, SpanDeltas, WeekConfig};

impl Timestamp {
    /// The last adjustment token, if and only if it is negative
    #[must_use]
    pub fn get_negative_adjustment(&self) -> Option<Adjustment> {
        let adjustment = Adjustment::parse_lenient(self.adjustments().last()?);
        adjustment.is_negative().then_some(adjustment)
    }

    /// The first positive adjustment token, which acts as the repeater
    #[must_use]
    pub fn get_repeater(&self) -> Option<Adjustment> {
        self.adjustments()
            .iter()
            .map(|token| Adjustment::parse_lenient(token))
            .find(|adjustment| !adjustment.is_negative() && !adjustment.is_noop())
    }

    /// Whether repeatedly applying the repeater, starting from this value's
    /// day, lands exactly on `date`'s day.
    ///
    /// The projection advances while strictly before the target and then
    /// checks for an exact hit, so overshooting a target between two
    /// repeats answers false rather than silently matching.
    #[must_use]
    pub fn repeats_on(&self, date: &Self) -> bool {
        self.get_repeater().is_some_and(|repeater| {
            let target = date.start_of_day();
            let mut current = self.start_of_day();
            while current.instant() < target.instant() {
                let next = current.apply_adjustment(&repeater);
                if next.instant() <= current.instant() {
                    // A projection that stops advancing can never hit.
                    return false;
                }
                current = next;
            }
            current.instant() == target.instant()
        })
    }

    /// The date scheduling logic should act on, after applying the warning
    /// window.
    ///
    /// Only active deadline/scheduled values move. Deadlines retreat by the
    /// negative adjustment (or the configured default warning days);
    /// scheduled values advance by the negative adjustment's amount in
    /// days, or stay put without one.
    #[must_use]
    pub fn get_adjusted_date(&self, config: &WeekConfig) -> Self {
        if !self.is_active() || !self.kind().is_plannable() {
            return self.clone();
        }
        match self.kind() {
            TimestampKind::Deadline => self.get_negative_adjustment().map_or_else(
                || self.subtract(&SpanDeltas::for_span(Span::Day, i64::from(config.warning_days()))),
                |adjustment| self.apply_adjustment(&adjustment),
            ),
            TimestampKind::Scheduled => self.get_negative_adjustment().map_or_else(
                || self.clone(),
                |adjustment| self.add(&SpanDeltas::for_span(Span::Day, adjustment.amount())),
            ),
            TimestampKind::None | TimestampKind::Closed => self.clone(),
        }
    }
}
