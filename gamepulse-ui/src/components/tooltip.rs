//! Chart Tooltip Component

use leptos::*;

/// Plain-text form of a tooltip
pub fn tooltip_text(name: &str, value: u64) -> String {
    format!("{}: {}", name, value)
}

/// Hovered item shown by a chart
#[derive(Clone, Debug, PartialEq)]
pub struct Hovered {
    pub name: String,
    pub value: u64,
    pub color: &'static str,
}

/// `name: value` with the value tinted in the item's colour
#[component]
pub fn ChartTooltip(#[prop(into)] hovered: Signal<Option<Hovered>>) -> impl IntoView {
    move || {
        hovered.get().map(|h| {
            view! {
                <div class="chart-tooltip">
                    {h.name}": "
                    <span style=format!("color: {}", h.color)>{h.value}</span>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_text() {
        assert_eq!(tooltip_text("Wins", 3), "Wins: 3");
    }
}
