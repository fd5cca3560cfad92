//! Per-period prayer aggregates.
//!
//! Three periods run in parallel: day, week and year. They are not buckets;
//! every completed session increments all three identically, so each period
//! is a cumulative counter with its own (scaled) goal. Counters only grow
//! within a session; goals never change after construction.

use serde::{Deserialize, Serialize};

use crate::config::GoalsConfig;
use crate::timer::{minute_add, TargetKind};

/// Statistic window. Tracked in parallel, not mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Year];

    /// Goal scale relative to the daily base values.
    pub fn multiplier(self) -> u64 {
        match self {
            Period::Day => 1,
            Period::Week => 7,
            Period::Year => 365,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Day => f.write_str("day"),
            Period::Week => f.write_str("week"),
            Period::Year => f.write_str("year"),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "year" => Ok(Period::Year),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

/// Goals for one period, scaled from the daily base. Immutable after
/// construction and never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodGoals {
    pub church_prayers: u64,
    pub church_minutes: u64,
    pub church_needs: u64,
    pub personal_prayers: u64,
    pub personal_minutes: u64,
}

impl PeriodGoals {
    fn scaled(config: &GoalsConfig, period: Period) -> Self {
        let m = period.multiplier();
        Self {
            church_prayers: config.church.prayers * m,
            church_minutes: config.church.minutes * m,
            church_needs: config.church.needs * m,
            personal_prayers: config.personal.entries * m,
            personal_minutes: config.personal.minutes * m,
        }
    }
}

/// Counters and goals for one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodStats {
    pub period: Period,
    pub church_prayers: u64,
    pub church_minutes: u64,
    /// Seed-only counter: distinct needs covered. Not wired to session
    /// completion (see DESIGN.md).
    pub church_needs_covered: u64,
    pub personal_prayers: u64,
    pub personal_minutes: u64,
    pub goals: PeriodGoals,
}

impl PeriodStats {
    fn new(config: &GoalsConfig, period: Period) -> Self {
        Self {
            period,
            church_prayers: 0,
            church_minutes: 0,
            church_needs_covered: 0,
            personal_prayers: 0,
            personal_minutes: 0,
            goals: PeriodGoals::scaled(config, period),
        }
    }

    fn record(&mut self, kind: TargetKind, minutes: u64) {
        match kind {
            TargetKind::Shared => {
                self.church_prayers += 1;
                self.church_minutes += minutes;
            }
            TargetKind::Journal => {
                self.personal_prayers += 1;
                self.personal_minutes += minutes;
            }
        }
    }

    /// Ring-fill ratios for display, each clamped to 1.0.
    pub fn progress(&self) -> PeriodProgress {
        PeriodProgress {
            church_prayers: ratio(self.church_prayers, self.goals.church_prayers),
            church_minutes: ratio(self.church_minutes, self.goals.church_minutes),
            church_needs: ratio(self.church_needs_covered, self.goals.church_needs),
            personal_prayers: ratio(self.personal_prayers, self.goals.personal_prayers),
            personal_minutes: ratio(self.personal_minutes, self.goals.personal_minutes),
        }
    }
}

/// Display-ready progress ratios, 0.0 to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodProgress {
    pub church_prayers: f64,
    pub church_minutes: f64,
    pub church_needs: f64,
    pub personal_prayers: f64,
    pub personal_minutes: f64,
}

fn ratio(value: u64, goal: u64) -> f64 {
    debug_assert!(goal > 0);
    (value as f64 / goal as f64).min(1.0)
}

/// The aggregator: one [`PeriodStats`] per tracked period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsBoard {
    day: PeriodStats,
    week: PeriodStats,
    year: PeriodStats,
}

impl StatsBoard {
    pub fn new(config: &GoalsConfig) -> Self {
        Self {
            day: PeriodStats::new(config, Period::Day),
            week: PeriodStats::new(config, Period::Week),
            year: PeriodStats::new(config, Period::Year),
        }
    }

    /// Credit one completed session to every period.
    pub fn record_session(&mut self, kind: TargetKind, elapsed_secs: u64) {
        let minutes = minute_add(elapsed_secs);
        self.day.record(kind, minutes);
        self.week.record(kind, minutes);
        self.year.record(kind, minutes);
    }

    pub fn period(&self, period: Period) -> &PeriodStats {
        match period {
            Period::Day => &self.day,
            Period::Week => &self.week,
            Period::Year => &self.year,
        }
    }

    /// Set the seed-only needs-covered counter on every period.
    pub(crate) fn seed_needs_covered(&mut self, needs: u64) {
        self.day.church_needs_covered = needs;
        self.week.church_needs_covered = needs;
        self.year.church_needs_covered = needs;
    }
}
