//! Read-only selection predicates used when styling day cells.

use crate::config::CalendarConfig;
use crate::date::CalendarDate;
use crate::eligibility::is_between;
use crate::state::CalendarState;

impl CalendarState {
    /// Whether `day` is the selected day or, in range mode, one of the range
    /// endpoints. An excluded day is never reported as selected.
    pub fn is_selected(&self, day: CalendarDate, config: &CalendarConfig) -> bool {
        let matches = self.selected == Some(day)
            || (config.enable_range_selection && self.range.iter().take(2).any(|endpoint| *endpoint == day));
        matches && self.eligibility(config).is_enabled(day)
    }

    /// Strictly inside the selected range.
    pub fn is_in_range(&self, day: CalendarDate, range_mode: bool) -> bool {
        range_mode && is_between(day, &self.range, range_mode)
    }

    pub fn is_range_first(&self, day: CalendarDate, range_mode: bool) -> bool {
        range_mode && self.range.first() == Some(&day)
    }

    pub fn is_range_last(&self, day: CalendarDate, range_mode: bool) -> bool {
        range_mode && self.range.get(1) == Some(&day)
    }
}
