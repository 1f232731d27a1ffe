//! Dashboard Page
//!
//! KPI cards, the two donut panels and the scenario breakdown.

use leptos::*;

use crate::api;
use crate::components::{BarChart, KpiCard, PieChart, PieLegend, ProgressBar};
use crate::state::derive::{
    kpi_cards, players_label, scenario_series, session_series, win_loss_series, win_rate,
    LOSS, WIN,
};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // One fetch on mount. The effect reads no signals, so it never re-runs.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_overview().await {
                Ok(snapshot) => state.loaded(snapshot),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch analytics: {}", e).into());
                    state.failed(e);
                }
            }
        });
    });

    let snapshot = state.snapshot;
    let win_loss = Signal::derive(move || snapshot.with(win_loss_series));
    let sessions = Signal::derive(move || snapshot.with(session_series));
    let scenarios = Signal::derive(move || snapshot.with(scenario_series));

    view! {
        <section class="kpis">
            // Card specs are fixed; only the values are reactive
            {kpi_cards(&Default::default())
                .into_iter()
                .enumerate()
                .map(|(i, card)| {
                    let value = Signal::derive(move || {
                        snapshot.with(|s| kpi_cards(s).get(i).map(|c| c.value).unwrap_or(0))
                    });
                    view! {
                        <KpiCard
                            label=card.label
                            value=value
                            color=card.color
                            caption=card.caption
                            delay_ms=card.delay_ms
                        />
                    }
                })
                .collect_view()}
        </section>

        <div class="panels">
            <section class="panel">
                <h2>"Win / Loss Split"</h2>
                <PieChart series=win_loss />
                <PieLegend series=win_loss />
            </section>

            <section class="panel">
                <h2>"Session Status"</h2>
                <PieChart series=sessions />
                <PieLegend series=sessions />
                {move || {
                    let s = snapshot.get();
                    view! {
                        <ProgressBar label="Completed" value=s.total_completed max=s.total_players color=WIN />
                        <ProgressBar label="Abandoned" value=s.total_abandoned max=s.total_players color=LOSS />
                    }
                }}
            </section>
        </div>

        <section class="panel">
            <h2>"Scenario Breakdown"</h2>
            <ScenarioRows />
            <BarChart series=scenarios />
        </section>
    }
}

/// Paired wins/losses bars and win rate per scenario
#[component]
fn ScenarioRows() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        state
            .snapshot
            .get()
            .scenario_stats
            .into_iter()
            .map(|stat| {
                let rate = win_rate(&stat);
                view! {
                    <div class="scenario">
                        <div>
                            <strong>{stat.scenario.clone()}</strong>
                            <span class="players">{players_label(stat.total_users)}</span>
                        </div>
                        <ProgressBar label="Wins" value=stat.win_count max=stat.total_users color=WIN />
                        <ProgressBar label="Losses" value=stat.loss_count max=stat.total_users color=LOSS />
                        <div class="win-rate">"Win Rate: "<span>{format!("{}%", rate)}</span></div>
                    </div>
                }
            })
            .collect_view()
    }
}
