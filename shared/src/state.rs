//! # Calendar State Module
//!
//! The widget's state is an immutable record. User interactions are
//! `CalendarEvent`s and `reduce` maps `(state, config, event)` to the next
//! state plus the selection to hand to the host's change callback, if any.
//!
//! ## Responsibilities:
//! - Day/month/year view switching
//! - Month and year-window navigation
//! - Single-day and range selection on click
//! - Marking every user transition so the next property sync is skipped

use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::date::CalendarDate;
use crate::eligibility::Eligibility;

/// Number of years shown in the year picker and skipped by next/previous
/// while it is open.
pub const YEAR_WINDOW: i32 = 12;

/// Which panel the calendar body renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Days,
    Months,
    Years,
}

/// A committed selection, as passed to the host's change callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Single(CalendarDate),
    /// Zero to two endpoints in chronological order
    Range(Vec<CalendarDate>),
}

impl Selection {
    /// The selection as a list of dates, the shape the external selection
    /// property accepts.
    pub fn dates(&self) -> Vec<CalendarDate> {
        match self {
            Selection::Single(day) => vec![*day],
            Selection::Range(range) => range.clone(),
        }
    }

    /// A single day, or a range with both endpoints.
    pub fn is_complete(&self) -> bool {
        match self {
            Selection::Single(_) => true,
            Selection::Range(range) => range.len() == 2,
        }
    }
}

/// User interactions the calendar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarEvent {
    ToggleMonths,
    ToggleYears,
    /// Month number, 1 = January
    SelectMonth(u32),
    SelectYear(i32),
    Next,
    Previous,
    SelectDay(CalendarDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    /// Start of the day the calendar was created on
    pub today: CalendarDate,
    /// Anchor for the grid and the picker windows
    pub displayed: CalendarDate,
    /// Selected day in single mode
    pub selected: Option<CalendarDate>,
    /// Selected endpoints in range mode, at most two, ordered
    pub range: Vec<CalendarDate>,
    pub view: ViewMode,
    /// Set by every user transition, cleared by the next sync cycle
    pub just_interacted: bool,
}

impl CalendarState {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            today,
            displayed: today,
            selected: None,
            range: Vec::new(),
            view: ViewMode::Days,
            just_interacted: false,
        }
    }

    pub fn eligibility<'a>(&self, config: &'a CalendarConfig) -> Eligibility<'a> {
        Eligibility::new(config, self.today)
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CalendarState,
    /// Selection to report to the host, if the event committed one
    pub emitted: Option<Selection>,
}

impl Transition {
    fn quiet(state: CalendarState) -> Self {
        Self { state, emitted: None }
    }
}

/// Apply `event` to `state`.
pub fn reduce(state: &CalendarState, config: &CalendarConfig, event: CalendarEvent) -> Transition {
    let range_mode = config.enable_range_selection;
    let mut next = state.clone();

    let transition = match event {
        CalendarEvent::ToggleMonths => {
            next.view = if state.view == ViewMode::Months { ViewMode::Days } else { ViewMode::Months };
            next.just_interacted = true;
            Transition::quiet(next)
        }
        CalendarEvent::ToggleYears => {
            next.view = if state.view == ViewMode::Years { ViewMode::Days } else { ViewMode::Years };
            next.just_interacted = true;
            Transition::quiet(next)
        }
        CalendarEvent::SelectMonth(month) => {
            let displayed = state.displayed.with_month(month);
            next.displayed = displayed;
            next.view = ViewMode::Days;
            next.just_interacted = true;
            if range_mode {
                Transition::quiet(next)
            } else {
                next.selected = Some(displayed);
                Transition { state: next, emitted: Some(Selection::Single(displayed)) }
            }
        }
        CalendarEvent::SelectYear(year) => {
            let displayed = state.displayed.with_year(year);
            next.displayed = displayed;
            next.view = ViewMode::Days;
            next.just_interacted = true;
            if range_mode {
                Transition::quiet(next)
            } else {
                next.selected = Some(displayed);
                Transition { state: next, emitted: Some(Selection::Single(displayed)) }
            }
        }
        CalendarEvent::Next => {
            next.displayed = step(state, 1);
            next.just_interacted = true;
            Transition::quiet(next)
        }
        CalendarEvent::Previous => {
            next.displayed = step(state, -1);
            next.just_interacted = true;
            Transition::quiet(next)
        }
        CalendarEvent::SelectDay(day) => {
            if !state.eligibility(config).is_enabled(day) {
                log::debug!("Ignoring click on excluded day {}", day);
                return Transition::quiet(next);
            }

            next.displayed = day;
            next.just_interacted = true;
            if range_mode {
                next.range = extend_range(&state.range, day);
                let emitted = Selection::Range(next.range.clone());
                Transition { state: next, emitted: Some(emitted) }
            } else {
                next.selected = Some(day);
                Transition { state: next, emitted: Some(Selection::Single(day)) }
            }
        }
    };

    log::debug!(
        "📅 {:?}: displayed {} view {:?} -> displayed {} view {:?}",
        event,
        state.displayed,
        state.view,
        transition.state.displayed,
        transition.state.view
    );
    transition
}

/// Next/previous moves a whole year window in the year picker and one month
/// everywhere else.
fn step(state: &CalendarState, direction: i32) -> CalendarDate {
    if state.view == ViewMode::Years {
        state.displayed.add_years(direction * YEAR_WINDOW)
    } else {
        state.displayed.add_months(direction)
    }
}

/// Add a clicked day to the range.
///
/// A full range restarts with the new day; a day on or before the single
/// stored endpoint becomes the start; anything else becomes the end.
pub fn extend_range(range: &[CalendarDate], day: CalendarDate) -> Vec<CalendarDate> {
    match range {
        [] => vec![day],
        [start] if day <= *start => vec![day, *start],
        [start] => vec![*start, day],
        _ => vec![day],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn march_state() -> CalendarState {
        CalendarState::new(date("2024-03-13"))
    }

    fn range_config() -> CalendarConfig {
        CalendarConfig {
            enable_range_selection: true,
            ..Default::default()
        }
    }

    fn click_all(config: &CalendarConfig, days: &[&str]) -> (CalendarState, Vec<Selection>) {
        let mut state = march_state();
        let mut emitted = Vec::new();
        for day in days {
            let transition = reduce(&state, config, CalendarEvent::SelectDay(date(day)));
            state = transition.state;
            emitted.extend(transition.emitted);
        }
        (state, emitted)
    }

    #[test]
    fn test_new_state_defaults() {
        let state = march_state();
        assert_eq!(state.displayed, state.today);
        assert_eq!(state.selected, None);
        assert!(state.range.is_empty());
        assert_eq!(state.view, ViewMode::Days);
        assert!(!state.just_interacted);
    }

    #[test]
    fn test_single_click_selects_and_emits() {
        let config = CalendarConfig::default();
        let transition = reduce(&march_state(), &config, CalendarEvent::SelectDay(date("2024-03-15")));

        assert_eq!(transition.state.selected, Some(date("2024-03-15")));
        assert_eq!(transition.state.displayed, date("2024-03-15"));
        assert!(transition.state.just_interacted);
        assert_eq!(transition.emitted, Some(Selection::Single(date("2024-03-15"))));
    }

    #[test]
    fn test_click_on_excluded_day_is_ignored() {
        let config = CalendarConfig {
            disable_weekends: true,
            ..Default::default()
        };
        let state = march_state();
        let transition = reduce(&state, &config, CalendarEvent::SelectDay(date("2024-03-16")));
        assert_eq!(transition.state, state);
        assert_eq!(transition.emitted, None);
    }

    #[test]
    fn test_range_in_order() {
        let (state, emitted) = click_all(&range_config(), &["2024-03-05", "2024-03-20"]);
        assert_eq!(state.range, vec![date("2024-03-05"), date("2024-03-20")]);
        assert_eq!(state.selected, None);
        assert_eq!(
            emitted,
            vec![
                Selection::Range(vec![date("2024-03-05")]),
                Selection::Range(vec![date("2024-03-05"), date("2024-03-20")]),
            ]
        );
    }

    #[test]
    fn test_range_reorders_earlier_second_click() {
        let (state, _) = click_all(&range_config(), &["2024-03-20", "2024-03-05"]);
        assert_eq!(state.range, vec![date("2024-03-05"), date("2024-03-20")]);
    }

    #[test]
    fn test_range_same_day_twice() {
        let (state, _) = click_all(&range_config(), &["2024-03-20", "2024-03-20"]);
        assert_eq!(state.range, vec![date("2024-03-20"), date("2024-03-20")]);
    }

    #[test]
    fn test_third_click_restarts_range() {
        let (state, emitted) = click_all(&range_config(), &["2024-03-05", "2024-03-20", "2024-03-10"]);
        assert_eq!(state.range, vec![date("2024-03-10")]);
        assert_eq!(emitted.last(), Some(&Selection::Range(vec![date("2024-03-10")])));
    }

    #[test]
    fn test_toggles_are_mutually_exclusive() {
        let config = CalendarConfig::default();
        let state = march_state();

        let years = reduce(&state, &config, CalendarEvent::ToggleYears).state;
        assert_eq!(years.view, ViewMode::Years);

        let months = reduce(&years, &config, CalendarEvent::ToggleMonths).state;
        assert_eq!(months.view, ViewMode::Months);

        let years_again = reduce(&months, &config, CalendarEvent::ToggleYears).state;
        assert_eq!(years_again.view, ViewMode::Years);

        let days = reduce(&years_again, &config, CalendarEvent::ToggleYears).state;
        assert_eq!(days.view, ViewMode::Days);
        assert!(days.just_interacted);
    }

    #[test]
    fn test_select_month_single_mode_emits_first_of_month() {
        let config = CalendarConfig::default();
        let state = reduce(&march_state(), &config, CalendarEvent::ToggleMonths).state;
        let transition = reduce(&state, &config, CalendarEvent::SelectMonth(7));

        assert_eq!(transition.state.displayed, date("2024-07-01"));
        assert_eq!(transition.state.selected, Some(date("2024-07-01")));
        assert_eq!(transition.state.view, ViewMode::Days);
        assert_eq!(transition.emitted, Some(Selection::Single(date("2024-07-01"))));
    }

    #[test]
    fn test_select_month_range_mode_only_navigates() {
        let config = range_config();
        let transition = reduce(&march_state(), &config, CalendarEvent::SelectMonth(7));
        assert_eq!(transition.state.displayed, date("2024-07-01"));
        assert_eq!(transition.state.selected, None);
        assert_eq!(transition.emitted, None);
    }

    #[test]
    fn test_select_year_keeps_month_and_day() {
        let config = CalendarConfig::default();
        let state = reduce(&march_state(), &config, CalendarEvent::ToggleYears).state;
        let transition = reduce(&state, &config, CalendarEvent::SelectYear(2030));

        assert_eq!(transition.state.displayed, date("2030-03-13"));
        assert_eq!(transition.state.view, ViewMode::Days);
        assert_eq!(transition.emitted, Some(Selection::Single(date("2030-03-13"))));

        let range = reduce(&state, &range_config(), CalendarEvent::SelectYear(2030));
        assert_eq!(range.emitted, None);
        assert_eq!(range.state.selected, None);
    }

    #[test]
    fn test_next_previous_by_month() {
        let config = CalendarConfig::default();
        let next = reduce(&march_state(), &config, CalendarEvent::Next).state;
        assert_eq!(next.displayed, date("2024-04-13"));
        assert!(next.just_interacted);

        let previous = reduce(&march_state(), &config, CalendarEvent::Previous).state;
        assert_eq!(previous.displayed, date("2024-02-13"));
    }

    #[test]
    fn test_next_previous_in_years_view_moves_window() {
        let config = CalendarConfig::default();
        let years = reduce(&march_state(), &config, CalendarEvent::ToggleYears).state;

        let next = reduce(&years, &config, CalendarEvent::Next).state;
        assert_eq!(next.displayed.year(), 2036);
        assert_eq!(next.view, ViewMode::Years);

        let previous = reduce(&years, &config, CalendarEvent::Previous).state;
        assert_eq!(previous.displayed.year(), 2012);
        assert_eq!(previous.view, ViewMode::Years);
    }

    #[test]
    fn test_selection_helpers() {
        assert_eq!(Selection::Single(date("2024-03-15")).dates(), vec![date("2024-03-15")]);
        assert!(Selection::Single(date("2024-03-15")).is_complete());
        assert!(!Selection::Range(vec![date("2024-03-15")]).is_complete());
        assert!(Selection::Range(vec![date("2024-03-15"), date("2024-03-16")]).is_complete());
    }
}
