use yew::prelude::*;
use web_sys::Element;
use wasm_bindgen::JsCast;
use calendar_shared::{CalendarConfig, CalendarDate, Eligibility, Selection};
use crate::components::calendar::Calendar;
use crate::services::date_utils::{format_selection, today};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Eligibility rules, range mode and locale for the dropdown calendar
    #[prop_or_default]
    pub config: CalendarConfig,
    /// Initial selection: one date, or up to two in range mode
    #[prop_or_default]
    pub default_value: Vec<CalendarDate>,
    #[prop_or(AttrValue::Static("Select a date"))]
    pub placeholder: AttrValue,
    /// Optional label for the date picker
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    /// Callback when the selection changes
    #[prop_or_default]
    pub on_change: Callback<Selection>,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let show_calendar = use_state(|| false);
    let value = use_state(|| props.default_value.clone());
    let picker_ref = use_node_ref();
    let current_date = *use_memo((), |_| today());

    let config = &props.config;
    let locale = config.locale_data();
    let display_text = if value.is_empty() {
        None
    } else {
        Some(format_selection(&value, locale))
    };

    // Toggle calendar visibility
    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            let was_open = *show_calendar;
            show_calendar.set(!was_open);
            Logger::debug_with_component("date-picker", &format!("📅 Calendar toggle: {} -> {}", was_open, !was_open));
        })
    };

    // Selection coming back from the calendar
    let on_calendar_change = {
        let value = value.clone();
        let show_calendar = show_calendar.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |selection: Selection| {
            value.set(selection.dates());
            if selection.is_complete() {
                show_calendar.set(false);
            }
            on_change.emit(selection);
        })
    };

    // "Today" shortcut, single mode only
    let today_enabled = !config.enable_range_selection && Eligibility::new(config, current_date).is_enabled(current_date);
    let on_today_click = {
        let value = value.clone();
        let show_calendar = show_calendar.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            value.set(vec![current_date]);
            show_calendar.set(false);
            on_change.emit(Selection::Single(current_date));
        })
    };

    // Close the dropdown on clicks outside the picker
    {
        let show_calendar = show_calendar.clone();
        let picker_ref = picker_ref.clone();
        use_effect_with(*show_calendar, move |is_open| {
            let listener = if *is_open {
                web_sys::window().map(|window| {
                    gloo::events::EventListener::new(&window, "click", move |e| {
                        let Some(target) = e.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
                            return;
                        };
                        if let Some(picker) = picker_ref.cast::<Element>() {
                            if !picker.contains(Some(&target)) {
                                show_calendar.set(false);
                            }
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    html! {
        <div class="fd-date-picker" ref={picker_ref}>
            {if let Some(label) = &props.label {
                html! { <label class="fd-date-picker__label">{label.clone()}</label> }
            } else { html! {} }}

            <div class="fd-date-picker__input">
                <button
                    type="button"
                    class="fd-date-picker__button"
                    onclick={toggle_calendar}
                    disabled={props.disabled}
                    aria-haspopup="dialog"
                    aria-expanded={show_calendar.to_string()}
                >
                    <span class={classes!("fd-date-picker__text", display_text.is_none().then(|| "is-placeholder"))}>
                        {display_text.unwrap_or_else(|| props.placeholder.to_string())}
                    </span>
                    <span class="fd-date-picker__icon">{"📅"}</span>
                </button>

                {if *show_calendar && !props.disabled {
                    html! {
                        <div class="fd-date-picker__dropdown" role="dialog">
                            <Calendar
                                enable_range_selection={config.enable_range_selection}
                                disable_weekends={config.disable_weekends}
                                disable_weekday={config.disable_weekday.clone()}
                                disable_past_dates={config.disable_past_dates}
                                disable_future_dates={config.disable_future_dates}
                                disable_before_date={config.disable_before_date}
                                disable_after_date={config.disable_after_date}
                                blocked_dates={config.blocked_dates.clone()}
                                disabled_dates={config.disabled_dates.clone()}
                                locale={AttrValue::from(config.locale.clone())}
                                custom_date={Some((*value).clone())}
                                on_change={on_calendar_change}
                            />
                            {if !config.enable_range_selection {
                                html! {
                                    <div class="fd-date-picker__footer">
                                        <button
                                            type="button"
                                            class="fd-date-picker__today"
                                            onclick={on_today_click}
                                            disabled={!today_enabled}
                                        >
                                            {"Today"}
                                        </button>
                                    </div>
                                }
                            } else { html! {} }}
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}
