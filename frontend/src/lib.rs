//! Yew components for the calendar widget.

pub mod components;
pub mod hooks;
pub mod services;

pub use components::calendar::{Calendar, CalendarProps};
pub use components::date_picker::{DatePicker, DatePickerProps};
