//! Week configuration value object - calendar conventions supplied by the host

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Calendar conventions the engine cannot decide on its own: where a week
/// starts and ends, and how many days before a deadline the default warning
/// window opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekConfig {
    week_start: Weekday,
    week_end: Weekday,
    warning_days: u32,
}

impl WeekConfig {
    /// Create a configuration from explicit weekdays and warning window
    #[must_use]
    pub const fn new(week_start: Weekday, week_end: Weekday, warning_days: u32) -> Self {
        Self {
            week_start,
            week_end,
            warning_days,
        }
    }

    /// Create a configuration from weekday names (`"monday"`, `"Mon"`, ...)
    pub fn from_weekday_names(
        week_start: &str,
        week_end: &str,
        warning_days: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(
            parse_weekday_name(week_start)?,
            parse_weekday_name(week_end)?,
            warning_days,
        ))
    }

    /// First day of the week
    #[must_use]
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Last day of the week
    #[must_use]
    pub const fn week_end(&self) -> Weekday {
        self.week_end
    }

    /// Default deadline warning window, in days
    #[must_use]
    pub const fn warning_days(&self) -> u32 {
        self.warning_days
    }
}

impl Default for WeekConfig {
    /// Monday-to-Sunday weeks with a 14-day deadline warning window
    fn default() -> Self {
        Self::new(Weekday::Mon, Weekday::Sun, 14)
    }
}

fn parse_weekday_name(name: &str) -> Result<Weekday, DomainError> {
    name.trim()
        .parse()
        .map_err(|_| DomainError::InvalidWeekday(name.to_string()))
}
