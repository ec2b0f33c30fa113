use calendar_shared::{CalendarDate, CalendarError, LocaleData};

/// Today's date in the browser's local timezone.
pub fn today() -> CalendarDate {
    let now = js_sys::Date::new_0();
    date_from_js(&now).unwrap_or_else(|| CalendarDate::from(chrono::Local::now().date_naive()))
}

/// Convert a JavaScript `Date` to a calendar day, using local time fields.
pub fn date_from_js(date: &js_sys::Date) -> Option<CalendarDate> {
    let year = date.get_full_year() as i32;
    let month = date.get_month() + 1; // JavaScript months are 0-indexed
    let day = date.get_date();
    CalendarDate::from_ymd(year, month, day).ok()
}

/// Format a date for display (e.g., "March 15, 2024")
pub fn format_date_for_display(date: CalendarDate, locale: &LocaleData) -> String {
    format!("{} {}, {}", locale.month_name(date.month()), date.day(), date.year())
}

/// Format a single date or a range for the picker's input button.
pub fn format_selection(dates: &[CalendarDate], locale: &LocaleData) -> String {
    dates
        .iter()
        .take(2)
        .map(|date| format_date_for_display(*date, locale))
        .collect::<Vec<_>>()
        .join(" - ")
}

/// Parse a comma-separated list of YYYY-MM-DD dates. Blank input is an empty
/// list.
pub fn parse_date_list(input: &str) -> Result<Vec<CalendarDate>, CalendarError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}
