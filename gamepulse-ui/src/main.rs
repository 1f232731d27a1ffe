//! Gamepulse Dashboard
//!
//! Game session analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - KPI cards that count up and cascade in on load
//! - Win/loss and session-status donut charts
//! - Per-scenario progress bars, win rates and a grouped bar chart
//!
//! # Architecture
//!
//! Client-side rendered Leptos application compiled to WebAssembly. It fetches
//! the analytics snapshot exactly once on mount; if that fails the dashboard
//! stays on the all-zero snapshot.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
