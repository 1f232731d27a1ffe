//! Pure derivations from the snapshot
//!
//! Percentages are integers rounded half up, computed without floats.

use super::global::{AnalyticsSnapshot, ScenarioStat};

pub const WIN: &str = "#00e5a0";
pub const LOSS: &str = "#ff3b5c";
pub const ACCENT: &str = "#00c8ff";
pub const GOLD: &str = "#ffcf40";
pub const BORDER: &str = "#1e2535";

/// Counter duration in milliseconds
pub const COUNTER_DURATION_MS: u32 = 1000;
/// Counter frame interval in milliseconds
pub const COUNTER_TICK_MS: u32 = 16;
/// Entrance delay added per KPI card
pub const CARD_DELAY_STEP_MS: u32 = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: u64,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioPoint {
    pub label: String,
    pub wins: u64,
    pub losses: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KpiSpec {
    pub label: &'static str,
    pub value: u64,
    pub color: &'static str,
    pub caption: &'static str,
    pub delay_ms: u32,
}

pub fn win_loss_series(snapshot: &AnalyticsSnapshot) -> Vec<SeriesPoint> {
    vec![
        SeriesPoint { label: "Wins", value: snapshot.total_win, color: WIN },
        SeriesPoint { label: "Losses", value: snapshot.total_loss, color: LOSS },
    ]
}

pub fn session_series(snapshot: &AnalyticsSnapshot) -> Vec<SeriesPoint> {
    vec![
        SeriesPoint { label: "Completed", value: snapshot.total_completed, color: WIN },
        SeriesPoint { label: "Abandoned", value: snapshot.total_abandoned, color: LOSS },
    ]
}

pub fn scenario_series(snapshot: &AnalyticsSnapshot) -> Vec<ScenarioPoint> {
    snapshot
        .scenario_stats
        .iter()
        .map(|s| ScenarioPoint {
            label: s.scenario.clone(),
            wins: s.win_count,
            losses: s.loss_count,
        })
        .collect()
}

pub fn kpi_cards(snapshot: &AnalyticsSnapshot) -> Vec<KpiSpec> {
    let cards = [
        ("Total Players", snapshot.total_players, ACCENT, "Registered users"),
        ("Completed", snapshot.total_completed, GOLD, "Finished sessions"),
        ("Abandoned", snapshot.total_abandoned, LOSS, "Dropped out"),
        ("Total Wins", snapshot.total_win, WIN, "Victories"),
        ("Total Losses", snapshot.total_loss, LOSS, "Defeats"),
    ];

    cards
        .into_iter()
        .zip(1u32..)
        .map(|((label, value, color, caption), n)| KpiSpec {
            label,
            value,
            color,
            caption,
            delay_ms: CARD_DELAY_STEP_MS * n,
        })
        .collect()
}

/// `round(win_count / total_users * 100)`, 0 when there are no users
pub fn win_rate(stat: &ScenarioStat) -> u64 {
    rounded_percent(stat.win_count, stat.total_users)
}

/// Unclamped fill percentage; 0 when `max` is 0
pub fn fill_percent(value: u64, max: u64) -> u64 {
    rounded_percent(value, max)
}

fn rounded_percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (part as u128, whole as u128);
    ((part * 100 + whole / 2) / whole).min(u64::MAX as u128) as u64
}

pub fn players_label(count: u64) -> String {
    if count == 1 {
        "1 player".to_string()
    } else {
        format!("{} players", count)
    }
}

/// Frame-stepped count from 0 up to a target
#[derive(Clone, Debug)]
pub struct Counter {
    target: u64,
    frames: f64,
    step: f64,
    ticks: u64,
    display: u64,
    settled: bool,
}

impl Counter {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        Self {
            target,
            frames,
            step: step_for(target, frames),
            ticks: 0,
            display: 0,
            settled: false,
        }
    }

    /// Start over from 0 towards a new target, keeping the timing
    pub fn retarget(&mut self, target: u64) {
        self.target = target;
        self.step = step_for(target, self.frames);
        self.ticks = 0;
        self.display = 0;
        self.settled = false;
    }

    /// Advance one frame. Floors while running; lands exactly on the target.
    pub fn tick(&mut self) -> u64 {
        if self.settled {
            return self.display;
        }
        self.ticks += 1;
        let running = self.step * self.ticks as f64;
        if running >= self.target as f64 {
            self.display = self.target;
            self.settled = true;
        } else {
            self.display = (running.floor() as u64).min(self.target);
        }
        self.display
    }

    pub fn display(&self) -> u64 {
        self.display
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

fn step_for(target: u64, frames: f64) -> f64 {
    if frames > 0.0 {
        target as f64 / frames
    } else {
        target as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            total_players: 2,
            total_completed: 0,
            total_abandoned: 2,
            total_win: 0,
            total_loss: 2,
            scenario_stats: vec![
                ScenarioStat {
                    scenario: "Easy Money".into(),
                    win_count: 0,
                    loss_count: 1,
                    total_users: 1,
                },
                ScenarioStat {
                    scenario: "Now or Never".into(),
                    win_count: 0,
                    loss_count: 1,
                    total_users: 1,
                },
            ],
        }
    }

    #[test]
    fn test_series_from_sample() {
        let snapshot = sample();
        let wl: Vec<_> = win_loss_series(&snapshot).iter().map(|p| (p.label, p.value)).collect();
        assert_eq!(wl, vec![("Wins", 0), ("Losses", 2)]);
        let sessions: Vec<_> = session_series(&snapshot).iter().map(|p| (p.label, p.value)).collect();
        assert_eq!(sessions, vec![("Completed", 0), ("Abandoned", 2)]);
        let colors: Vec<_> = session_series(&snapshot).iter().map(|p| p.color).collect();
        assert_eq!(colors, vec![WIN, LOSS]);
        assert!(snapshot.scenario_stats.iter().all(|s| win_rate(s) == 0));
        assert_eq!(scenario_series(&snapshot)[1].label, "Now or Never");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(fill_percent(0, 0), 0);
        assert_eq!(fill_percent(1, 3), 33);
        assert_eq!(fill_percent(2, 3), 67);
        assert_eq!(fill_percent(3, 2), 150);
        let stat = |w, u| ScenarioStat { scenario: String::new(), win_count: w, loss_count: 0, total_users: u };
        assert_eq!(win_rate(&stat(1, 1)), 100);
        assert_eq!(win_rate(&stat(0, 0)), 0);
        assert_eq!(win_rate(&stat(1, 8)), 13);
    }

    #[test]
    fn test_kpi_cards_cascade() {
        let delays: Vec<u32> = kpi_cards(&sample()).iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![50, 100, 150, 200, 250]);
    }

    #[test]
    fn test_counter_settles_on_target() {
        let mut counter = Counter::new(100, 1000, 16);
        let mut last = 0;
        let mut ticks = 0;
        while !counter.is_settled() {
            let value = counter.tick();
            assert!(value >= last && value <= 100);
            last = value;
            ticks += 1;
        }
        assert_eq!(last, 100);
        assert_eq!(ticks, 63);

        let mut zero = Counter::new(0, 1000, 16);
        assert_eq!(zero.tick(), 0);
        assert!(zero.is_settled());
    }

    #[test]
    fn test_counter_retarget_mid_flight() {
        let mut counter = Counter::new(0, 1000, 16);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_settled());

        counter.retarget(1000);
        assert_eq!(counter.display(), 0);
        assert!(!counter.is_settled());
        for _ in 0..10 {
            counter.tick();
        }
        let partway = counter.display();
        assert!(partway > 0 && partway < 1000);

        counter.retarget(u64::MAX);
        assert_eq!(counter.display(), 0);
        let mut last = 0;
        while !counter.is_settled() {
            let value = counter.tick();
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, u64::MAX);
    }

    #[test]
    fn test_players_label() {
        assert_eq!(players_label(1), "1 player");
        assert_eq!(players_label(0), "0 players");
    }
}
