//! Day-granularity date value used by every calendar computation.
//!
//! `CalendarDate` wraps `chrono::NaiveDate` and exposes only the arithmetic
//! the widget needs: stepping by days, months and years, snapping to month
//! and week boundaries, and comparison. Month and year steps clamp the day to
//! the length of the target month, so January 31 plus one month is the last
//! day of February.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A calendar day without time or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year, 1-based month and day of month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CalendarError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 = January.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Add (or with a negative count, subtract) whole days.
    ///
    /// Steps past the representable range leave the date unchanged.
    pub fn add_days(self, days: i64) -> Self {
        let stepped = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        stepped.map(Self).unwrap_or(self)
    }

    /// Add (or subtract) whole months, clamping the day to the target month.
    pub fn add_months(self, months: i32) -> Self {
        let stepped = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        stepped.map(Self).unwrap_or(self)
    }

    /// Add (or subtract) whole years; February 29 lands on February 28 in
    /// non-leap years.
    pub fn add_years(self, years: i32) -> Self {
        self.add_months(years.saturating_mul(12))
    }

    /// First day of `month` in this date's year. Out-of-range months leave the
    /// month unchanged.
    pub fn with_month(self, month: u32) -> Self {
        NaiveDate::from_ymd_opt(self.year(), month, 1)
            .map(Self)
            .unwrap_or_else(|| self.first_of_month())
    }

    /// Same month and day in `year`, clamped to the month's length.
    pub fn with_year(self, year: i32) -> Self {
        let day = self.day().min(days_in_month(year, self.month()));
        NaiveDate::from_ymd_opt(year, self.month(), day)
            .map(Self)
            .unwrap_or(self)
    }

    /// The following day, `None` at the end of the representable range.
    pub fn next_day(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn first_of_month(self) -> Self {
        self.0.with_day(1).map(Self).unwrap_or(self)
    }

    pub fn last_of_month(self) -> Self {
        self.0
            .with_day(days_in_month(self.year(), self.month()))
            .map(Self)
            .unwrap_or(self)
    }

    /// The first day of the week containing this date, for weeks starting on
    /// `first_day`. Saturates at the earliest representable date.
    pub fn start_of_week(self, first_day: Weekday) -> Self {
        self.0
            .checked_sub_days(Days::new(self.days_into_week(first_day)))
            .map(Self)
            .unwrap_or(Self(NaiveDate::MIN))
    }

    /// The last day of the week containing this date. Saturates at the latest
    /// representable date.
    pub fn end_of_week(self, first_day: Weekday) -> Self {
        self.0
            .checked_add_days(Days::new(6 - self.days_into_week(first_day)))
            .map(Self)
            .unwrap_or(Self(NaiveDate::MAX))
    }

    fn days_into_week(&self, first_day: Weekday) -> u64 {
        let offset = (self.weekday().num_days_from_sunday() + 7 - first_day.num_days_from_sunday()) % 7;
        u64::from(offset)
    }

    pub fn is_same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CalendarError::InvalidDate(s.to_string()))
    }
}

/// Get days in a month (accounting for leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
