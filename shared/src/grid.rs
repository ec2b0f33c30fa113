//! View models for the three calendar panels.
//!
//! Everything here is a pure function of `CalendarState` and
//! `CalendarConfig`; the frontend only maps these structs to markup.

use crate::config::CalendarConfig;
use crate::date::CalendarDate;
use crate::locale::LocaleData;
use crate::state::{CalendarState, YEAR_WINDOW};

/// One cell of the day grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    /// Day of month shown in the cell
    pub day: u32,
    /// Leading or trailing day from an adjacent month
    pub other_month: bool,
    pub today: bool,
    pub selected: bool,
    pub range_first: bool,
    pub range_last: bool,
    pub in_range: bool,
    pub disabled: bool,
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthItem {
    /// 1 = January
    pub month: u32,
    pub name: &'static str,
    pub short_name: &'static str,
    /// The displayed month
    pub selected: bool,
    /// Today's month
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearItem {
    pub year: i32,
    /// The displayed year
    pub selected: bool,
    /// Today's year
    pub current: bool,
}

/// Day grid column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayLabel {
    /// First letter of the minimal weekday name
    pub letter: String,
    pub name: &'static str,
}

/// Labels for the two toggle buttons in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationLabels {
    pub month_name: &'static str,
    pub year: i32,
}

/// Read-only projection of a calendar state for rendering.
pub struct CalendarView<'a> {
    state: &'a CalendarState,
    config: &'a CalendarConfig,
    locale: &'a LocaleData,
}

impl<'a> CalendarView<'a> {
    pub fn new(state: &'a CalendarState, config: &'a CalendarConfig) -> Self {
        Self::with_locale(state, config, config.locale_data())
    }

    /// Render with name tables from a caller-supplied locale provider.
    pub fn with_locale(state: &'a CalendarState, config: &'a CalendarConfig, locale: &'a LocaleData) -> Self {
        Self { state, config, locale }
    }

    pub fn navigation(&self) -> NavigationLabels {
        NavigationLabels {
            month_name: self.locale.month_name(self.state.displayed.month()),
            year: self.state.displayed.year(),
        }
    }

    /// Column headers in the locale's week order.
    pub fn weekday_labels(&self) -> Vec<WeekdayLabel> {
        self.locale
            .ordered_weekdays()
            .iter()
            .map(|weekday| WeekdayLabel {
                letter: self.locale.weekday_letter(*weekday),
                name: self.locale.weekday_name(*weekday),
            })
            .collect()
    }

    /// Whole weeks covering the displayed month, seven cells per row.
    pub fn weeks(&self) -> Vec<Vec<DayCell>> {
        let first_day = self.locale.first_day_of_week;
        let first_of_month = self.state.displayed.first_of_month();
        let start = first_of_month.start_of_week(first_day);
        let end = first_of_month.last_of_month().end_of_week(first_day);

        let mut weeks = Vec::new();
        let mut week = Vec::with_capacity(7);
        let mut next = Some(start);
        while let Some(day) = next.filter(|day| *day <= end) {
            week.push(self.day_cell(day));
            if week.len() == 7 {
                weeks.push(std::mem::replace(&mut week, Vec::with_capacity(7)));
            }
            next = day.next_day();
        }
        // Only short at the ends of the representable range
        if !week.is_empty() {
            weeks.push(week);
        }
        weeks
    }

    fn day_cell(&self, date: CalendarDate) -> DayCell {
        let state = self.state;
        let range_mode = self.config.enable_range_selection;
        let rules = state.eligibility(self.config);

        DayCell {
            date,
            day: date.day(),
            other_month: !date.is_same_month(&state.displayed),
            today: date == state.today,
            selected: state.is_selected(date, self.config),
            range_first: state.is_range_first(date, range_mode),
            range_last: state.is_range_last(date, range_mode),
            in_range: state.is_in_range(date, range_mode),
            disabled: !rules.is_enabled(date),
            blocked: rules.is_blocked(date),
        }
    }

    pub fn months(&self) -> Vec<MonthItem> {
        (1..=12)
            .map(|month| MonthItem {
                month,
                name: self.locale.month_name(month),
                short_name: self.locale.month_short_name(month),
                selected: self.state.displayed.month() == month,
                current: self.state.today.month() == month,
            })
            .collect()
    }

    /// Twelve consecutive years starting at the displayed year.
    pub fn years(&self) -> Vec<YearItem> {
        let first = self.state.displayed.year();
        (first..first + YEAR_WINDOW)
            .map(|year| YearItem {
                year,
                selected: year == first,
                current: year == self.state.today.year(),
            })
            .collect()
    }
}
