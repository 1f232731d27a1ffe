//! Progress Bar Component

use leptos::*;

use crate::state::derive::fill_percent;

/// Rendered width: the fill percentage capped at a full track
pub fn bar_width(value: u64, max: u64) -> u64 {
    fill_percent(value, max).min(100)
}

/// Labelled bar showing `value` against `max`
#[component]
pub fn ProgressBar(
    #[prop(into)]
    label: String,
    value: u64,
    max: u64,
    color: &'static str,
) -> impl IntoView {
    let width = bar_width(value, max);

    view! {
        <div class="progress">
            <div class="row">
                <span>{label}</span>
                <span style=format!("color: {}", color)>{value}</span>
            </div>
            <div class="track">
                <div
                    class="fill"
                    style=format!("width: {}%; background: {}", width, color)
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_caps_overflow() {
        assert_eq!(bar_width(0, 0), 0);
        assert_eq!(bar_width(1, 2), 50);
        assert_eq!(bar_width(5, 2), 100);
    }
}
