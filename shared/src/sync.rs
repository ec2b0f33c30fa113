//! One-way synchronization of the host's external selection into state.
//!
//! The host may drive the calendar through an external selection value (a
//! list of dates: one in single mode, up to two in range mode, empty to
//! clear). A user interaction takes precedence over the value the host passes
//! in the same cycle, so the first sync cycle after an interaction only
//! clears the interaction flag.

use crate::date::CalendarDate;
use crate::state::CalendarState;

/// Merge the host's external selection into `prev`.
///
/// `external` is `None` when the host does not drive the selection at all,
/// in which case `prev` is returned as is.
pub fn synchronize(
    prev: &CalendarState,
    external: Option<&[CalendarDate]>,
    just_interacted: bool,
    range_mode: bool,
) -> CalendarState {
    let Some(external) = external else {
        return prev.clone();
    };

    if just_interacted {
        log::debug!("Skipping external selection sync after user interaction");
        return CalendarState {
            just_interacted: false,
            ..prev.clone()
        };
    }

    if range_mode {
        if external == prev.range.as_slice() {
            return prev.clone();
        }
        return match external.first() {
            None => {
                log::debug!("External range cleared, resetting to today");
                reset(prev)
            }
            Some(first) => {
                let mut range: Vec<CalendarDate> = external.iter().take(2).copied().collect();
                range.sort();
                log::debug!("Syncing external range {:?}", range);
                CalendarState {
                    displayed: *first,
                    range,
                    selected: None,
                    ..prev.clone()
                }
            }
        };
    }

    match external.first() {
        None => {
            log::debug!("External date cleared, resetting to today");
            reset(prev)
        }
        Some(day) if *day == prev.displayed && prev.selected == Some(*day) => prev.clone(),
        Some(day) => {
            log::debug!("Syncing external date {}", day);
            CalendarState {
                displayed: *day,
                selected: Some(*day),
                ..prev.clone()
            }
        }
    }
}

/// Per-instance bookkeeping for feeding the host's external selection into
/// `synchronize` once per render.
///
/// The interaction flag is consumed on the first render after a user
/// transition, whether or not the host value changed in that render. Apart
/// from that render, only a host value that differs from the last one seen is
/// merged, so a value the host merely keeps passing never overrides later
/// navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalSync {
    last_seen: Option<Vec<CalendarDate>>,
}

impl ExternalSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// State to render after a render with `external` as the host value.
    pub fn on_render(
        &mut self,
        prev: &CalendarState,
        external: Option<&[CalendarDate]>,
        range_mode: bool,
    ) -> CalendarState {
        let changed = self.last_seen.as_deref() != external;
        if changed {
            self.last_seen = external.map(<[CalendarDate]>::to_vec);
        }

        if prev.just_interacted {
            log::debug!("Consuming interaction flag, host value changed: {}", changed);
            return CalendarState {
                just_interacted: false,
                ..prev.clone()
            };
        }
        if !changed {
            return prev.clone();
        }
        synchronize(prev, external, false, range_mode)
    }
}

fn reset(prev: &CalendarState) -> CalendarState {
    CalendarState {
        displayed: prev.today,
        range: Vec::new(),
        selected: None,
        ..prev.clone()
    }
}
