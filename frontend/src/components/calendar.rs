use std::rc::Rc;
use yew::prelude::*;
use calendar_shared::locale::DEFAULT_LOCALE;
use calendar_shared::{
    CalendarConfig, CalendarDate, CalendarEvent, CalendarView, DayCell, LocaleData, LocaleProvider, MonthItem,
    Selection, ViewMode, Weekday, YearItem,
};
use crate::hooks::use_calendar::{use_calendar, UseCalendarResult};

/// Host-supplied locale tables, compared by identity.
#[derive(Clone)]
pub struct Locales(pub Rc<dyn LocaleProvider>);

impl Locales {
    pub fn new(provider: impl LocaleProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn resolve(&self, tag: &str) -> &LocaleData {
        LocaleData::resolve(self.0.as_ref(), tag)
    }
}

impl PartialEq for Locales {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    /// Select a start/end pair instead of a single day
    #[prop_or_default]
    pub enable_range_selection: bool,
    #[prop_or_default]
    pub disable_weekends: bool,
    #[prop_or_default]
    pub disable_weekday: Vec<Weekday>,
    #[prop_or_default]
    pub disable_past_dates: bool,
    #[prop_or_default]
    pub disable_future_dates: bool,
    #[prop_or_default]
    pub disable_before_date: Option<CalendarDate>,
    #[prop_or_default]
    pub disable_after_date: Option<CalendarDate>,
    /// Days strictly between the two dates are blocked
    #[prop_or_default]
    pub blocked_dates: Vec<CalendarDate>,
    /// Days strictly between the two dates are disabled
    #[prop_or_default]
    pub disabled_dates: Vec<CalendarDate>,
    #[prop_or(AttrValue::Static(DEFAULT_LOCALE))]
    pub locale: AttrValue,
    /// Tables to look `locale` up in instead of the builtin ones
    #[prop_or_default]
    pub locales: Option<Locales>,
    /// Externally driven selection; `None` leaves the calendar uncontrolled
    #[prop_or_default]
    pub custom_date: Option<Vec<CalendarDate>>,
    /// Called after every committed selection change
    #[prop_or_default]
    pub on_change: Callback<Selection>,

    // Presentation options, forwarded as-is
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub month_list_class: Classes,
    #[prop_or_default]
    pub year_list_class: Classes,
    #[prop_or_default]
    pub table_class: Classes,
    #[prop_or_default]
    pub table_header_class: Classes,
    #[prop_or_default]
    pub table_body_class: Classes,
    #[prop_or_default]
    pub disable_styles: bool,
}

impl CalendarProps {
    pub fn config(&self) -> CalendarConfig {
        CalendarConfig {
            enable_range_selection: self.enable_range_selection,
            disable_weekends: self.disable_weekends,
            disable_weekday: self.disable_weekday.clone(),
            disable_past_dates: self.disable_past_dates,
            disable_future_dates: self.disable_future_dates,
            disable_before_date: self.disable_before_date,
            disable_after_date: self.disable_after_date,
            blocked_dates: self.blocked_dates.clone(),
            disabled_dates: self.disabled_dates.clone(),
            locale: self.locale.to_string(),
        }
    }
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let config = props.config();
    let UseCalendarResult { state, dispatch } = use_calendar(&config, props.custom_date.clone(), &props.on_change);
    let locale = match &props.locales {
        Some(locales) => locales.resolve(&config.locale),
        None => config.locale_data(),
    };
    let view = CalendarView::with_locale(&state, &config, locale);

    let content = match state.view {
        ViewMode::Months => render_months(&view.months(), &dispatch, props),
        ViewMode::Years => render_years(&view.years(), &dispatch, props),
        ViewMode::Days => render_days(&view, &dispatch, props),
    };

    html! {
        <div class={classes!("fd-calendar", props.class.clone())}>
            {render_navigation(&view, &dispatch, props.disable_styles)}
            <div class="fd-calendar__content">
                {content}
            </div>
        </div>
    }
}

fn render_navigation(view: &CalendarView, dispatch: &Callback<CalendarEvent>, disable_styles: bool) -> Html {
    let labels = view.navigation();
    let button_class = nav_button_classes(disable_styles);

    html! {
        <header class="fd-calendar__header">
            <div class="fd-calendar__navigation">
                <div class="fd-calendar__action">
                    <button
                        type="button"
                        class={classes!(button_class.clone(), "sap-icon--slim-arrow-left")}
                        aria-label="Previous"
                        onclick={dispatch.reform(|_: MouseEvent| CalendarEvent::Previous)}
                    />
                </div>
                <div class="fd-calendar__action">
                    <button
                        type="button"
                        class={button_class.clone()}
                        onclick={dispatch.reform(|_: MouseEvent| CalendarEvent::ToggleMonths)}
                    >
                        <span>{labels.month_name}</span>
                    </button>
                </div>
                <div class="fd-calendar__action">
                    <button
                        type="button"
                        class={button_class.clone()}
                        onclick={dispatch.reform(|_: MouseEvent| CalendarEvent::ToggleYears)}
                    >
                        <span>{labels.year}</span>
                    </button>
                </div>
                <div class="fd-calendar__action">
                    <button
                        type="button"
                        class={classes!(button_class, "sap-icon--slim-arrow-right")}
                        aria-label="Next"
                        onclick={dispatch.reform(|_: MouseEvent| CalendarEvent::Next)}
                    />
                </div>
            </div>
        </header>
    }
}

fn render_months(months: &[MonthItem], dispatch: &Callback<CalendarEvent>, props: &CalendarProps) -> Html {
    html! {
        <div class="fd-calendar__months">
            <ul class={classes!("fd-calendar__list", props.month_list_class.clone())} role="listbox">
                {for months.iter().map(|item| {
                    let month = item.month;
                    html! {
                        <li
                            key={item.name}
                            class={item_classes(item.selected, item.current)}
                            name={item.name}
                            role="option"
                            aria-selected={item.selected.to_string()}
                            onclick={dispatch.reform(move |_: MouseEvent| CalendarEvent::SelectMonth(month))}
                        >
                            {item.short_name}
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

fn render_years(years: &[YearItem], dispatch: &Callback<CalendarEvent>, props: &CalendarProps) -> Html {
    html! {
        <div class="fd-calendar__months">
            <ul class={classes!("fd-calendar__list", props.year_list_class.clone())} role="listbox">
                {for years.iter().map(|item| {
                    let year = item.year;
                    html! {
                        <li
                            key={year}
                            class={item_classes(item.selected, item.current)}
                            name={year.to_string()}
                            role="option"
                            aria-selected={item.selected.to_string()}
                            onclick={dispatch.reform(move |_: MouseEvent| CalendarEvent::SelectYear(year))}
                        >
                            {year}
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

fn render_days(view: &CalendarView, dispatch: &Callback<CalendarEvent>, props: &CalendarProps) -> Html {
    html! {
        <div class="fd-calendar__dates">
            <table class={classes!("fd-calendar__table", props.table_class.clone())} role="grid">
                <thead class={classes!("fd-calendar__group", props.table_header_class.clone())}>
                    <tr class="fd-calendar__row">
                        {for view.weekday_labels().into_iter().map(|label| html! {
                            <th class="fd-calendar__column-header" key={label.name} aria-label={label.name}>
                                <span class="fd-calendar__day-of-week">{label.letter}</span>
                            </th>
                        })}
                    </tr>
                </thead>
                <tbody class={classes!("fd-calendar__group", props.table_body_class.clone())}>
                    {for view.weeks().into_iter().map(|week| {
                        let row_key = week.first().map(|cell| cell.date.to_string()).unwrap_or_default();
                        html! {
                            <tr class="fd-calendar__row" key={row_key}>
                                {for week.iter().map(|cell| render_day(cell, dispatch))}
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_day(cell: &DayCell, dispatch: &Callback<CalendarEvent>) -> Html {
    let date = cell.date;
    let onclick = (!cell.disabled).then(|| dispatch.reform(move |_: MouseEvent| CalendarEvent::SelectDay(date)));

    html! {
        <td
            key={date.to_string()}
            class={day_classes(cell)}
            role="gridcell"
            aria-selected={cell.selected.to_string()}
            aria-disabled={cell.disabled.to_string()}
            {onclick}
        >
            <span class="fd-calendar__text">{cell.day}</span>
        </td>
    }
}

/// CSS classes for a day cell.
pub fn day_classes(cell: &DayCell) -> Classes {
    classes!(
        "fd-calendar__item",
        cell.other_month.then(|| "fd-calendar__item--other-month"),
        cell.today.then(|| "fd-calendar__item--current"),
        cell.selected.then(|| "is-selected"),
        cell.range_first.then(|| "is-selected-range-first"),
        cell.range_last.then(|| "is-selected-range-last"),
        cell.in_range.then(|| "is-selected-range"),
        cell.disabled.then(|| "is-disabled"),
        cell.blocked.then(|| "is-blocked")
    )
}

/// CSS classes for a month or year picker item.
pub fn item_classes(selected: bool, current: bool) -> Classes {
    classes!(
        "fd-calendar__item",
        selected.then(|| "is-selected"),
        current.then(|| "fd-calendar__item--current")
    )
}

/// Navigation buttons drop the theme classes when styles are disabled.
pub fn nav_button_classes(disable_styles: bool) -> Classes {
    if disable_styles {
        classes!("fd-calendar__button")
    } else {
        classes!("fd-calendar__button", "fd-button", "fd-button--compact", "fd-button--light")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn cell(date: &str) -> DayCell {
        let date: CalendarDate = date.parse().unwrap();
        DayCell {
            date,
            day: date.day(),
            other_month: false,
            today: false,
            selected: false,
            range_first: false,
            range_last: false,
            in_range: false,
            disabled: false,
            blocked: false,
        }
    }

    #[wasm_bindgen_test]
    fn test_plain_day_classes() {
        let classes = day_classes(&cell("2024-03-15"));
        assert!(classes.contains("fd-calendar__item"));
        assert!(!classes.contains("is-selected"));
        assert!(!classes.contains("is-disabled"));
    }

    #[wasm_bindgen_test]
    fn test_flagged_day_classes() {
        let flagged = DayCell {
            other_month: true,
            selected: true,
            range_first: true,
            blocked: true,
            disabled: true,
            ..cell("2024-03-15")
        };
        let classes = day_classes(&flagged);
        assert!(classes.contains("fd-calendar__item--other-month"));
        assert!(classes.contains("is-selected"));
        assert!(classes.contains("is-selected-range-first"));
        assert!(classes.contains("is-blocked"));
        assert!(classes.contains("is-disabled"));
        assert!(!classes.contains("is-selected-range-last"));
    }

    #[wasm_bindgen_test]
    fn test_item_classes() {
        let classes = item_classes(true, false);
        assert!(classes.contains("is-selected"));
        assert!(!classes.contains("fd-calendar__item--current"));
        assert!(item_classes(false, true).contains("fd-calendar__item--current"));
    }

    struct GermanOnly;

    impl LocaleProvider for GermanOnly {
        fn locale_data(&self, _tag: &str) -> Result<&LocaleData, calendar_shared::CalendarError> {
            Ok(LocaleData::builtin("de"))
        }
    }

    #[wasm_bindgen_test]
    fn test_locales_resolve_through_provider() {
        let locales = Locales::new(GermanOnly);
        assert_eq!(locales.resolve("en").tag, "de");
        assert!(locales == locales.clone());
        assert!(locales != Locales::new(GermanOnly));
    }

    #[wasm_bindgen_test]
    fn test_disable_styles_drops_theme_classes() {
        assert!(nav_button_classes(false).contains("fd-button--compact"));
        assert!(!nav_button_classes(true).contains("fd-button--compact"));
        assert!(nav_button_classes(true).contains("fd-calendar__button"));
    }
}
