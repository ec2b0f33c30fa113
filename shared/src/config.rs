use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::locale::{LocaleData, DEFAULT_LOCALE};

/// Host-supplied options that shape selection and eligibility.
///
/// Every field is optional when loaded from JSON; missing fields take the
/// values from `Default`, which disable every exclusion rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Select a start/end pair instead of a single day
    pub enable_range_selection: bool,
    /// Saturdays and Sundays are not selectable
    pub disable_weekends: bool,
    /// Weekdays that are not selectable ("Monday", "tue", ...)
    pub disable_weekday: Vec<Weekday>,
    /// Days before today are not selectable
    pub disable_past_dates: bool,
    /// Days after today are not selectable
    pub disable_future_dates: bool,
    /// Days before this date are not selectable
    pub disable_before_date: Option<CalendarDate>,
    /// Days after this date are not selectable
    pub disable_after_date: Option<CalendarDate>,
    /// Days strictly between the two dates are blocked
    pub blocked_dates: Vec<CalendarDate>,
    /// Days strictly between the two dates are disabled
    pub disabled_dates: Vec<CalendarDate>,
    /// Locale tag for month and weekday names
    pub locale: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            enable_range_selection: false,
            disable_weekends: false,
            disable_weekday: Vec::new(),
            disable_past_dates: false,
            disable_future_dates: false,
            disable_before_date: None,
            disable_after_date: None,
            blocked_dates: Vec::new(),
            disabled_dates: Vec::new(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl CalendarConfig {
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Name tables for the configured locale.
    pub fn locale_data(&self) -> &'static LocaleData {
        LocaleData::builtin(&self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_exclusions() {
        let config = CalendarConfig::default();
        assert!(!config.enable_range_selection);
        assert!(config.disable_weekday.is_empty());
        assert!(config.blocked_dates.is_empty());
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = CalendarConfig::from_json(
            r#"{
                "enable_range_selection": true,
                "disable_weekday": ["Monday", "fri"],
                "blocked_dates": ["2024-03-10", "2024-03-20"],
                "disable_before_date": "2024-01-01",
                "locale": "de"
            }"#,
        )
        .unwrap();

        assert!(config.enable_range_selection);
        assert_eq!(config.disable_weekday, vec![Weekday::Mon, Weekday::Fri]);
        assert_eq!(config.blocked_dates.len(), 2);
        assert_eq!(config.disable_before_date, Some("2024-01-01".parse().unwrap()));
        assert!(config.disable_after_date.is_none());
        assert!(!config.disable_weekends);
        assert_eq!(config.locale_data().tag, "de");
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            CalendarConfig::from_json(r#"{"disable_weekend": true}"#),
            Err(CalendarError::Config(_))
        ));
        assert!(CalendarConfig::from_json(r#"{"blocked_dates": ["2024-02-30"]}"#).is_err());
        assert!(CalendarConfig::from_json(r#"{"disable_weekday": ["Someday"]}"#).is_err());
    }
}
