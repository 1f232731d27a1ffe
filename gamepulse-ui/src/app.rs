//! App Root Component
//!
//! Fixed header plus the dashboard page, with global state provided.

use leptos::*;

use crate::pages::Dashboard;
use crate::state::global::{provide_global_state, GlobalState, LoadState};

/// Title shown in the header and the document
pub const DASHBOARD_TITLE: &str = "Game Analytics";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Header />
        <main>
            <Dashboard />
        </main>
    }
}

/// Fixed header with the title and a live-data badge
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <header>
            <h1>{DASHBOARD_TITLE}</h1>
            // Same badge in every load state; a failure only adds data-error
            <span class="badge" data-error=move || state.load_state.with(LoadState::failure)>
                "LIVE DATA"
            </span>
        </header>
    }
}
