//! Month and weekday name tables.
//!
//! The widget never formats dates through a full i18n engine; it only needs
//! name tables and the first day of the week. Those come from a
//! `LocaleProvider`. `BuiltinLocales` ships a handful of tables and is what
//! `CalendarConfig` uses unless a host supplies its own provider.

use chrono::Weekday;

use crate::error::CalendarError;

/// Name tables for one locale. Weekday tables are indexed Sunday first.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleData {
    pub tag: &'static str,
    pub months: [&'static str; 12],
    pub months_short: [&'static str; 12],
    pub weekdays: [&'static str; 7],
    pub weekdays_min: [&'static str; 7],
    pub first_day_of_week: Weekday,
}

/// Source of locale tables.
pub trait LocaleProvider {
    fn locale_data(&self, tag: &str) -> Result<&LocaleData, CalendarError>;
}

/// Tables compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocales;

pub const DEFAULT_LOCALE: &str = "en";

const EN: LocaleData = LocaleData {
    tag: "en",
    months: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    months_short: ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
    weekdays: ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    weekdays_min: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    first_day_of_week: Weekday::Sun,
};

const EN_GB: LocaleData = LocaleData {
    tag: "en-gb",
    first_day_of_week: Weekday::Mon,
    ..EN
};

const DE: LocaleData = LocaleData {
    tag: "de",
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni",
        "Juli", "August", "September", "Oktober", "November", "Dezember",
    ],
    months_short: ["Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.", "Dez."],
    weekdays: ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
    weekdays_min: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    first_day_of_week: Weekday::Mon,
};

const FR: LocaleData = LocaleData {
    tag: "fr",
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin",
        "juillet", "août", "septembre", "octobre", "novembre", "décembre",
    ],
    months_short: ["janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc."],
    weekdays: ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
    weekdays_min: ["di", "lu", "ma", "me", "je", "ve", "sa"],
    first_day_of_week: Weekday::Mon,
};

const ES: LocaleData = LocaleData {
    tag: "es",
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio",
        "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
    ],
    months_short: ["ene.", "feb.", "mar.", "abr.", "may.", "jun.", "jul.", "ago.", "sept.", "oct.", "nov.", "dic."],
    weekdays: ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"],
    weekdays_min: ["do", "lu", "ma", "mi", "ju", "vi", "sá"],
    first_day_of_week: Weekday::Mon,
};

static BUILTIN: [&LocaleData; 5] = [&EN, &EN_GB, &DE, &FR, &ES];

impl BuiltinLocales {
    /// Look up a tag like `de`, `de-AT` or `en_GB`. A region that has no table
    /// of its own falls back to its language.
    pub fn lookup(tag: &str) -> Result<&'static LocaleData, CalendarError> {
        let normalized = tag.trim().to_ascii_lowercase().replace('_', "-");
        let language = normalized.split('-').next().unwrap_or_default();

        BUILTIN
            .iter()
            .find(|data| data.tag == normalized)
            .or_else(|| BUILTIN.iter().find(|data| data.tag == language))
            .copied()
            .ok_or_else(|| CalendarError::UnknownLocale(tag.to_string()))
    }
}

impl LocaleProvider for BuiltinLocales {
    fn locale_data(&self, tag: &str) -> Result<&LocaleData, CalendarError> {
        Self::lookup(tag)
    }
}

impl LocaleData {
    /// Resolve `tag` through `provider`, falling back to English.
    pub fn resolve<'a, P: LocaleProvider + ?Sized>(provider: &'a P, tag: &str) -> &'a LocaleData {
        match provider.locale_data(tag) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("{}, falling back to '{}'", e, DEFAULT_LOCALE);
                BUILTIN[0]
            }
        }
    }

    /// Builtin table for `tag`, English when the tag is unknown.
    pub fn builtin(tag: &str) -> &'static LocaleData {
        match BuiltinLocales::lookup(tag) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("{}, falling back to '{}'", e, DEFAULT_LOCALE);
                BUILTIN[0]
            }
        }
    }

    /// Full month name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|index| self.months.get(index as usize))
            .copied()
            .unwrap_or_default()
    }

    pub fn month_short_name(&self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|index| self.months_short.get(index as usize))
            .copied()
            .unwrap_or_default()
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekdays[weekday.num_days_from_sunday() as usize]
    }

    /// Single-letter column header for a weekday, in the table's case.
    pub fn weekday_letter(&self, weekday: Weekday) -> String {
        self.weekdays_min[weekday.num_days_from_sunday() as usize]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default()
    }

    /// The seven weekdays in display order for this locale.
    pub fn ordered_weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.first_day_of_week; 7];
        for index in 1..7 {
            days[index] = days[index - 1].succ();
        }
        days
    }
}
