//! Animated Number Component
//!
//! Counts up to its target on a repeating timer.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::state::derive::{Counter, COUNTER_DURATION_MS, COUNTER_TICK_MS};

/// Displays `value`, counting from 0 whenever it changes
#[component]
pub fn AnimatedNumber(
    #[prop(into)]
    value: Signal<u64>,
    #[prop(default = COUNTER_DURATION_MS)]
    duration_ms: u32,
) -> impl IntoView {
    let display = create_rw_signal(0u64);
    let counter = store_value(Counter::new(0, duration_ms, COUNTER_TICK_MS));
    let timer = store_value(None::<Interval>);

    create_effect(move |_| {
        let target = value.get();

        counter.update_value(|c| c.retarget(target));
        display.set(0);

        // A settled counter leaves its interval idle until the next target
        // or unmount replaces it; dropping the stored interval cancels it.
        let interval = Interval::new(COUNTER_TICK_MS, move || {
            let frame = counter
                .try_update_value(|c| (!c.is_settled()).then(|| c.tick()))
                .flatten();
            if let Some(shown) = frame {
                display.set(shown);
            }
        });
        timer.update_value(|t| *t = Some(interval));
    });

    on_cleanup(move || {
        timer.try_update_value(|t| *t = None);
    });

    view! { <span>{move || display.get()}</span> }
}
