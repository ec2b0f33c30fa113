//! Date logic and view models for the calendar widget.
//!
//! This crate has no UI dependencies. The frontend crate owns a
//! `CalendarState`, feeds user interactions through `reduce`, feeds the
//! host's external selection through `synchronize`, and renders the structs
//! produced by `CalendarView`.

pub mod config;
pub mod date;
pub mod eligibility;
pub mod error;
pub mod grid;
pub mod locale;
pub mod selection;
pub mod state;
pub mod sync;

pub use chrono::Weekday;
pub use config::CalendarConfig;
pub use date::CalendarDate;
pub use eligibility::{is_between, Eligibility, Exclusion};
pub use error::CalendarError;
pub use grid::{CalendarView, DayCell, MonthItem, NavigationLabels, WeekdayLabel, YearItem};
pub use locale::{BuiltinLocales, LocaleData, LocaleProvider};
pub use state::{reduce, CalendarEvent, CalendarState, Selection, Transition, ViewMode, YEAR_WINDOW};
pub use sync::{synchronize, ExternalSync};
