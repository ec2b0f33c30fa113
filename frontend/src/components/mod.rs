pub mod calendar;
pub mod date_picker;
