//! KPI Card Component

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::AnimatedNumber;

/// Headline number with a caption. Fades in `delay_ms` after mount.
#[component]
pub fn KpiCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<u64>,
    color: &'static str,
    caption: &'static str,
    delay_ms: u32,
) -> impl IntoView {
    let visible = create_rw_signal(false);

    let entrance = store_value(Some(Timeout::new(delay_ms, move || visible.set(true))));
    on_cleanup(move || {
        entrance.try_update_value(|t| *t = None);
    });

    view! {
        <div class=move || if visible.get() { "kpi-card visible" } else { "kpi-card" }>
            <div class="label">{label}</div>
            <div class="value" style=format!("color: {}", color)>
                <AnimatedNumber value=value />
            </div>
            <div class="caption">{caption}</div>
        </div>
    }
}
