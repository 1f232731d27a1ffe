//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod animated_number;
pub mod bar_chart;
pub mod kpi_card;
pub mod pie_chart;
pub mod progress_bar;
pub mod tooltip;

pub use animated_number::AnimatedNumber;
pub use bar_chart::BarChart;
pub use kpi_card::KpiCard;
pub use pie_chart::{PieChart, PieLegend};
pub use progress_bar::ProgressBar;
pub use tooltip::ChartTooltip;
