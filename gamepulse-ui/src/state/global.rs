//! Global Application State
//!
//! The fetched snapshot is written once by the dashboard page and read by
//! every component.

use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate statistics as served by the analytics endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_players: u64,
    pub total_completed: u64,
    pub total_abandoned: u64,
    pub total_win: u64,
    pub total_loss: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scenario_stats: Vec<ScenarioStat>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioStat {
    pub scenario: String,
    pub win_count: u64,
    pub loss_count: u64,
    pub total_users: u64,
}

/// Response wrapper; only `data` is read
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub data: AnalyticsSnapshot,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ScenarioStat>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ScenarioStat>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Pending,
    Loaded,
    /// The fetch failed; the snapshot stays all-zero
    Failed(String),
}

impl LoadState {
    /// Why the fetch failed, if it did. Only exposed as a data attribute.
    pub fn failure(&self) -> Option<String> {
        match self {
            LoadState::Failed(reason) => Some(reason.clone()),
            LoadState::Pending | LoadState::Loaded => None,
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Current snapshot, all-zero until the fetch resolves
    pub snapshot: RwSignal<AnalyticsSnapshot>,
    pub load_state: RwSignal<LoadState>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        snapshot: create_rw_signal(AnalyticsSnapshot::default()),
        load_state: create_rw_signal(LoadState::Pending),
    };

    provide_context(state);
}

impl GlobalState {
    /// Replace the snapshot with a fetched one
    pub fn loaded(&self, snapshot: AnalyticsSnapshot) {
        self.snapshot.set(snapshot);
        self.load_state.set(LoadState::Loaded);
    }

    /// Record a failure; the zero snapshot is left in place
    pub fn failed(&self, reason: String) {
        self.load_state.set(LoadState::Failed(reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_stats_null_or_missing() {
        let missing: AnalyticsSnapshot = serde_json::from_str(
            r#"{"totalPlayers":1,"totalCompleted":1,"totalAbandoned":0,"totalWin":1,"totalLoss":0}"#,
        )
        .unwrap();
        assert!(missing.scenario_stats.is_empty());

        let null: AnalyticsSnapshot = serde_json::from_str(
            r#"{"totalPlayers":1,"totalCompleted":1,"totalAbandoned":0,"totalWin":1,"totalLoss":0,"scenarioStats":null}"#,
        )
        .unwrap();
        assert!(null.scenario_stats.is_empty());
    }

    #[test]
    fn test_only_failures_carry_a_reason() {
        assert_eq!(LoadState::Pending.failure(), None);
        assert_eq!(LoadState::Loaded.failure(), None);
        assert_eq!(LoadState::Failed("HTTP 502".into()).failure().as_deref(), Some("HTTP 502"));
    }

    #[test]
    fn test_default_is_all_zero() {
        let snapshot = AnalyticsSnapshot::default();
        assert_eq!(snapshot.total_players, 0);
        assert_eq!(snapshot.total_loss, 0);
        assert!(snapshot.scenario_stats.is_empty());
    }
}
