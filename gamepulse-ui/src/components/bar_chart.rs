//! Bar Chart Component
//!
//! Wins and losses side by side per scenario, on an integer y axis.

use leptos::*;

use crate::components::tooltip::Hovered;
use crate::components::ChartTooltip;
use crate::state::derive::{ScenarioPoint, BORDER, LOSS, WIN};

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 200.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 8.0;
const MARGIN_TOP: f64 = 8.0;
const MARGIN_BOTTOM: f64 = 28.0;
const CATEGORY_GAP: f64 = 0.35;
const BAR_GAP: f64 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub label: String,
    pub label_x: f64,
    pub wins: Bar,
    pub losses: Bar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub axis_max: u64,
    /// (value, y) per grid line
    pub ticks: Vec<(u64, f64)>,
    pub groups: Vec<Group>,
    pub baseline: f64,
}

/// Smallest 1/2/5-stepped integer at or above `max`, using at most four
/// intervals. Empty charts get 0..4.
pub fn nice_axis_max(max: u64) -> u64 {
    if max == 0 {
        return 4;
    }
    let step = nice_step(max.div_ceil(4));
    max.div_ceil(step).saturating_mul(step)
}

fn nice_step(raw: u64) -> u64 {
    let mut magnitude = 1u64;
    loop {
        for factor in [1u64, 2, 5] {
            match factor.checked_mul(magnitude) {
                Some(step) if step >= raw => return step,
                Some(_) => {}
                None => return raw,
            }
        }
        magnitude = match magnitude.checked_mul(10) {
            Some(m) => m,
            None => return raw,
        };
    }
}

pub fn layout(series: &[ScenarioPoint]) -> Layout {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_height;

    let max_value = series.iter().map(|s| s.wins.max(s.losses)).max().unwrap_or(0);
    let axis_max = nice_axis_max(max_value);
    let scale = |v: u64| v as f64 / axis_max as f64 * plot_height;

    let step = nice_step(axis_max.div_ceil(4)).max(1);
    let ticks = std::iter::successors(Some(0u64), |v| v.checked_add(step).filter(|n| *n <= axis_max))
        .map(|v| (v, baseline - scale(v)))
        .collect();

    let groups = if series.is_empty() {
        Vec::new()
    } else {
        let band = plot_width / series.len() as f64;
        let gap = band * CATEGORY_GAP;
        let bar_width = ((band - gap - BAR_GAP) / 2.0).max(0.0);

        series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let band_start = MARGIN_LEFT + band * i as f64;
                let x = band_start + gap / 2.0;
                let bar = |x: f64, value: u64| Bar {
                    x,
                    y: baseline - scale(value),
                    width: bar_width,
                    height: scale(value),
                    value,
                };
                Group {
                    label: s.label.clone(),
                    label_x: band_start + band / 2.0,
                    wins: bar(x, s.wins),
                    losses: bar(x + bar_width + BAR_GAP, s.losses),
                }
            })
            .collect()
    };

    Layout { axis_max, ticks, groups, baseline }
}

fn bar_view(bar: Bar, name: String, color: &'static str, hovered: RwSignal<Option<Hovered>>) -> impl IntoView {
    let value = bar.value;
    view! {
        <rect
            x=format!("{:.2}", bar.x)
            y=format!("{:.2}", bar.y)
            width=format!("{:.2}", bar.width)
            height=format!("{:.2}", bar.height)
            rx="3"
            fill=color
            on:mouseenter=move |_| hovered.set(Some(Hovered { name: name.clone(), value, color }))
            on:mouseleave=move |_| hovered.set(None)
        />
    }
}

#[component]
pub fn BarChart(#[prop(into)] series: Signal<Vec<ScenarioPoint>>) -> impl IntoView {
    let hovered = create_rw_signal(None::<Hovered>);

    view! {
        <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) width="100%" height=HEIGHT>
            {move || {
                let layout = layout(&series.get());
                let baseline = layout.baseline;

                let grid = layout
                    .ticks
                    .into_iter()
                    .map(|(value, y)| {
                        view! {
                            <line x1=MARGIN_LEFT x2={WIDTH - MARGIN_RIGHT} y1=y y2=y stroke=BORDER stroke-dasharray="3 3" />
                            <text x={MARGIN_LEFT - 6.0} y={y + 3.0} text-anchor="end">{value}</text>
                        }
                    })
                    .collect_view();

                let bars = layout
                    .groups
                    .into_iter()
                    .map(|g| {
                        let label_x = g.label_x;
                        view! {
                            {bar_view(g.wins, format!("{} Wins", g.label), WIN, hovered)}
                            {bar_view(g.losses, format!("{} Losses", g.label), LOSS, hovered)}
                            <text x=label_x y={baseline + MARGIN_BOTTOM * 0.65} text-anchor="middle">{g.label}</text>
                        }
                    })
                    .collect_view();

                view! { {grid} {bars} }
            }}
        </svg>
        <ChartTooltip hovered=hovered />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, wins: u64, losses: u64) -> ScenarioPoint {
        ScenarioPoint { label: label.to_string(), wins, losses }
    }

    #[test]
    fn test_nice_axis_max() {
        assert_eq!(nice_axis_max(0), 4);
        assert_eq!(nice_axis_max(1), 1);
        assert_eq!(nice_axis_max(5), 6);
        assert_eq!(nice_axis_max(37), 40);
        assert_eq!(nice_axis_max(101), 150);
    }

    #[test]
    fn test_layout_scales_to_axis() {
        let layout = layout(&[point("Easy Money", 0, 1), point("Now or Never", 0, 1)]);
        assert_eq!(layout.axis_max, 1);
        assert_eq!(layout.groups.len(), 2);

        let g = &layout.groups[0];
        assert_eq!(g.wins.height, 0.0);
        assert!((g.losses.height - (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM)).abs() < 1e-9);
        assert!(g.losses.x > g.wins.x);
    }

    #[test]
    fn test_huge_counts_saturate_axis() {
        assert_eq!(nice_axis_max(u64::MAX), u64::MAX);

        let layout = layout(&[point("Whale", u64::MAX, 1)]);
        assert_eq!(layout.axis_max, u64::MAX);
        assert!(layout.ticks.windows(2).all(|w| w[0].0 < w[1].0));
        assert!((layout.groups[0].wins.height - (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM)).abs() < 1e-6);
    }

    #[test]
    fn test_empty_layout() {
        let layout = layout(&[]);
        assert!(layout.groups.is_empty());
        assert_eq!(layout.ticks.len(), 5);
    }
}
