use yew::prelude::*;
use calendar_frontend::services::date_utils::{format_date_for_display, parse_date_list};
use calendar_frontend::services::logging::Logger;
use calendar_frontend::{Calendar, DatePicker};
use calendar_shared::{CalendarConfig, CalendarDate, Selection};

// Booking calendar rules, in the same JSON shape a host page would embed
const BOOKING_CONFIG: &str = r#"{
    "enable_range_selection": true,
    "disable_past_dates": true,
    "disable_weekday": ["Sun"],
    "locale": "en-gb"
}"#;

const DEFAULT_RANGE: &str = "2026-11-02, 2026-11-06";

fn booking_config() -> CalendarConfig {
    CalendarConfig::from_json(BOOKING_CONFIG).unwrap_or_else(|e| {
        Logger::error_with_component("app", &format!("Invalid booking config, using defaults: {}", e));
        CalendarConfig::default()
    })
}

fn default_range() -> Vec<CalendarDate> {
    parse_date_list(DEFAULT_RANGE).unwrap_or_else(|e| {
        Logger::warn_with_component("app", &format!("Ignoring default range: {}", e));
        Vec::new()
    })
}

#[function_component(App)]
fn app() -> Html {
    let booking = use_memo((), |_| booking_config());
    let range = use_state(default_range);
    let single = use_state(|| Option::<CalendarDate>::None);

    let on_single_change = {
        let single = single.clone();
        Callback::from(move |selection: Selection| {
            single.set(selection.dates().first().copied());
        })
    };

    let on_range_change = {
        let range = range.clone();
        Callback::from(move |selection: Selection| {
            range.set(selection.dates());
        })
    };

    let clear_range = {
        let range = range.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::info_with_component("app", "Clearing booking range");
            range.set(Vec::new());
        })
    };

    let locale = booking.locale_data();
    let range_text = if range.is_empty() {
        "No dates".to_string()
    } else {
        range
            .iter()
            .map(|date| format_date_for_display(*date, locale))
            .collect::<Vec<_>>()
            .join(" - ")
    };

    html! {
        <main class="app">
            <section>
                <h2>{"Single date"}</h2>
                <Calendar disable_weekends={true} on_change={on_single_change} />
                <p>
                    {single
                        .map(|date| format_date_for_display(date, CalendarConfig::default().locale_data()))
                        .unwrap_or_else(|| "Nothing selected".to_string())}
                </p>
            </section>

            <section>
                <h2>{"Booking range"}</h2>
                <Calendar
                    enable_range_selection={booking.enable_range_selection}
                    disable_past_dates={booking.disable_past_dates}
                    disable_weekday={booking.disable_weekday.clone()}
                    locale={AttrValue::from(booking.locale.clone())}
                    custom_date={Some((*range).clone())}
                    on_change={on_range_change}
                />
                <p>{range_text}</p>
                <button type="button" onclick={clear_range}>{"Clear"}</button>
            </section>

            <section>
                <h2>{"Date picker"}</h2>
                <DatePicker
                    label={AttrValue::from("Delivery date")}
                    config={CalendarConfig { disable_weekends: true, ..(*booking).clone() }}
                />
            </section>
        </main>
    }
}

fn main() {
    if let Err(e) = Logger::init(log::LevelFilter::Debug) {
        gloo::console::error!(format!("Logger already installed: {}", e));
    }
    yew::Renderer::<App>::new().render();
}
