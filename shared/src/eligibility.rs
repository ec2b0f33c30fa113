//! Per-day eligibility rules.
//!
//! All comparisons are day-granular. Bounds are inclusive for the
//! before/after rules (the bound day itself stays selectable) and exclusive
//! for the blocked/disabled pairs (only days strictly between the two dates
//! are excluded).

use chrono::Weekday;

use crate::config::CalendarConfig;
use crate::date::CalendarDate;

/// The rule that excluded a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Weekday(Weekday),
    Weekend,
    BeforeDate,
    AfterDate,
    PastDate,
    FutureDate,
    Blocked,
    Disabled,
}

/// Evaluates the configured rules against `today`.
#[derive(Debug, Clone, Copy)]
pub struct Eligibility<'a> {
    config: &'a CalendarConfig,
    today: CalendarDate,
}

impl<'a> Eligibility<'a> {
    pub fn new(config: &'a CalendarConfig, today: CalendarDate) -> Self {
        Self { config, today }
    }

    /// The first rule that excludes `day`, checked in a fixed order.
    pub fn first_exclusion(&self, day: CalendarDate) -> Option<Exclusion> {
        let config = self.config;

        if config.disable_weekday.contains(&day.weekday()) {
            return Some(Exclusion::Weekday(day.weekday()));
        }
        if config.disable_weekends && day.is_weekend() {
            return Some(Exclusion::Weekend);
        }
        if config.disable_before_date.is_some_and(|bound| day < bound) {
            return Some(Exclusion::BeforeDate);
        }
        if config.disable_after_date.is_some_and(|bound| day > bound) {
            return Some(Exclusion::AfterDate);
        }
        if config.disable_past_dates && day < self.today {
            return Some(Exclusion::PastDate);
        }
        if config.disable_future_dates && day > self.today {
            return Some(Exclusion::FutureDate);
        }
        if is_between(day, &config.blocked_dates, false) {
            return Some(Exclusion::Blocked);
        }
        if is_between(day, &config.disabled_dates, false) {
            return Some(Exclusion::Disabled);
        }
        None
    }

    pub fn is_enabled(&self, day: CalendarDate) -> bool {
        self.first_exclusion(day).is_none()
    }

    /// Whether `day` sits inside the blocked pair. Used for styling; a blocked
    /// day is also reported as not enabled.
    pub fn is_blocked(&self, day: CalendarDate) -> bool {
        is_between(day, &self.config.blocked_dates, false)
    }
}

/// Whether `day` lies strictly between the first two `bounds`.
///
/// Fewer than two bounds means "no constraint". With `range_mode`, a pair
/// given end-first is read the other way round.
pub fn is_between(day: CalendarDate, bounds: &[CalendarDate], range_mode: bool) -> bool {
    let (start, end) = match bounds {
        [start, end, ..] => (*start, *end),
        _ => return false,
    };

    if range_mode && start > end {
        return end < day && day < start;
    }
    start < day && day < end
}
