//! Pie Chart Component
//!
//! Donut chart drawn as SVG paths. Zero-valued points take no space; an
//! all-zero series draws an empty ring.

use leptos::*;

use crate::components::tooltip::{tooltip_text, Hovered};
use crate::components::ChartTooltip;
use crate::state::derive::{SeriesPoint, BORDER};

const WIDTH: f64 = 240.0;
const HEIGHT: f64 = 200.0;
const INNER: f64 = 55.0;
const OUTER: f64 = 80.0;
const PADDING_ANGLE: f64 = 3.0;

/// Sector of the ring, angles in degrees clockwise from 12 o'clock
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub point: SeriesPoint,
    pub start: f64,
    pub end: f64,
}

pub fn slices(series: &[SeriesPoint]) -> Vec<Slice> {
    let visible: Vec<&SeriesPoint> = series.iter().filter(|p| p.value > 0).collect();
    let total: u128 = visible.iter().map(|p| u128::from(p.value)).sum();
    if total == 0 {
        return Vec::new();
    }

    let padding = if visible.len() > 1 { PADDING_ANGLE } else { 0.0 };
    let available = 360.0 - padding * visible.len() as f64;

    let mut angle = 0.0;
    visible
        .into_iter()
        .map(|p| {
            let sweep = available * p.value as f64 / total as f64;
            let slice = Slice { point: p.clone(), start: angle, end: angle + sweep };
            angle += sweep + padding;
            slice
        })
        .collect()
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    let rad = angle.to_radians();
    (WIDTH / 2.0 + radius * rad.sin(), HEIGHT / 2.0 - radius * rad.cos())
}

/// Two concentric circles; drawn with `fill-rule="evenodd"`
fn ring_path() -> String {
    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);
    let circle = |r: f64| {
        format!(
            "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bot:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z",
            top = cy - r,
            bot = cy + r,
        )
    };
    format!("{} {}", circle(OUTER), circle(INNER))
}

impl Slice {
    pub fn path(&self) -> String {
        if self.end - self.start >= 360.0 - 1e-9 {
            return ring_path();
        }

        let large = if self.end - self.start > 180.0 { 1 } else { 0 };
        let (osx, osy) = polar(OUTER, self.start);
        let (oex, oey) = polar(OUTER, self.end);
        let (iex, iey) = polar(INNER, self.end);
        let (isx, isy) = polar(INNER, self.start);

        format!(
            "M {osx:.2} {osy:.2} A {OUTER:.2} {OUTER:.2} 0 {large} 1 {oex:.2} {oey:.2} \
             L {iex:.2} {iey:.2} A {INNER:.2} {INNER:.2} 0 {large} 0 {isx:.2} {isy:.2} Z",
        )
    }
}

#[component]
pub fn PieChart(#[prop(into)] series: Signal<Vec<SeriesPoint>>) -> impl IntoView {
    let hovered = create_rw_signal(None::<Hovered>);

    view! {
        <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) width="100%" height=HEIGHT>
            {move || {
                let slices = slices(&series.get());
                if slices.is_empty() {
                    return view! {
                        <path d=ring_path() fill=BORDER fill-rule="evenodd" />
                    }
                    .into_view();
                }

                slices
                    .into_iter()
                    .map(|slice| {
                        let d = slice.path();
                        let SeriesPoint { label, value, color } = slice.point;
                        view! {
                            <path
                                d=d
                                fill=color
                                fill-rule="evenodd"
                                aria-label=tooltip_text(label, value)
                                on:mouseenter=move |_| hovered.set(Some(Hovered {
                                    name: label.to_string(),
                                    value,
                                    color,
                                }))
                                on:mouseleave=move |_| hovered.set(None)
                            />
                        }
                    })
                    .collect_view()
            }}
        </svg>
        <ChartTooltip hovered=hovered />
    }
}

/// Coloured dot, label and value per series point
#[component]
pub fn PieLegend(#[prop(into)] series: Signal<Vec<SeriesPoint>>) -> impl IntoView {
    view! {
        <div class="legend">
            {move || {
                series
                    .get()
                    .into_iter()
                    .map(|p| {
                        view! {
                            <span>
                                <span class="dot" style=format!("background: {}", p.color) />
                                {p.label}" "
                                <span style=format!("color: {}", p.color)>{p.value}</span>
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
