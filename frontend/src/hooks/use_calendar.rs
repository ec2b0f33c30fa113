use yew::prelude::*;
use calendar_shared::{reduce, CalendarConfig, CalendarDate, CalendarEvent, CalendarState, ExternalSync, Selection};
use crate::services::date_utils::today;
use crate::services::logging::Logger;

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub dispatch: Callback<CalendarEvent>,
}

/// Owns a calendar's state.
///
/// User events go through `reduce`; committed selections are forwarded to
/// `on_change`. A new `custom_date` value is merged in through
/// `ExternalSync`, except in the render right after a user interaction.
#[hook]
pub fn use_calendar(
    config: &CalendarConfig,
    custom_date: Option<Vec<CalendarDate>>,
    on_change: &Callback<Selection>,
) -> UseCalendarResult {
    let state = use_state(|| CalendarState::new(today()));
    let external_sync = use_mut_ref(ExternalSync::new);

    // Runs after every render so the interaction flag never outlives the
    // render that follows a transition
    {
        let state = state.clone();
        let range_mode = config.enable_range_selection;
        use_effect(move || {
            let next = external_sync
                .borrow_mut()
                .on_render(&state, custom_date.as_deref(), range_mode);
            if next != *state {
                state.set(next);
            }
            || ()
        });
    }

    let dispatch = {
        let state = state.clone();
        let config = config.clone();
        let on_change = on_change.clone();
        Callback::from(move |event: CalendarEvent| {
            let transition = reduce(&state, &config, event);
            state.set(transition.state);

            if let Some(selection) = transition.emitted {
                Logger::debug_with_component("calendar", &format!("📅 Selection changed: {:?}", selection));
                on_change.emit(selection);
            }
        })
    };

    UseCalendarResult {
        state: (*state).clone(),
        dispatch,
    }
}
