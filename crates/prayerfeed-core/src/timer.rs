//! Hold-to-pray timer.
//!
//! A wall-clock-based state machine with no internal threads: `Idle` or
//! `Active` against exactly one target entry. Elapsed time is computed on
//! demand from epoch-millisecond deltas; nothing ticks in the background.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active    start(target), always succeeds (last writer wins)
//! Active -> Idle    stop(target), only when the target matches
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::EntryId;

/// Which collection a timer target lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Shared,
    Journal,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Shared => f.write_str("shared"),
            TargetKind::Journal => f.write_str("journal"),
        }
    }
}

impl std::str::FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shared" => Ok(TargetKind::Shared),
            "journal" => Ok(TargetKind::Journal),
            other => Err(format!("unknown target kind: {other}")),
        }
    }
}

/// The entry a timer session is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerTarget {
    pub id: EntryId,
    pub kind: TargetKind,
}

/// The in-progress session, when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    pub target: TimerTarget,
    pub started_ms: u64,
}

/// A session the timer has just closed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSession {
    pub target: TimerTarget,
    /// Wall-clock seconds, floored at 1 so a tap still counts.
    pub elapsed_secs: u64,
    /// Minutes credited to aggregates and entry counters, floored at 1.
    pub minutes: u64,
}

/// Why a stop command was rejected. The display text is pushed verbatim
/// into the notice slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StopError {
    #[error("No prayer in progress")]
    NotActive,
    #[error("A different prayer is being timed")]
    TargetMismatch,
}

/// Single-active-session prayer timer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrayerTimer {
    active: Option<ActiveSession>,
}

impl PrayerTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    /// Begin timing against `target`. Always succeeds; a session already in
    /// progress is silently replaced (last writer wins -- the UI exposes a
    /// single hold button, so a second start can only come from the same
    /// actor changing their mind).
    pub fn start_at(&mut self, target: TimerTarget, now_ms: u64) {
        self.active = Some(ActiveSession {
            target,
            started_ms: now_ms,
        });
    }

    /// Pure read of the running session's elapsed seconds.
    pub fn elapsed_secs_at(&self, now_ms: u64) -> Option<u64> {
        self.active
            .map(|s| round_secs(now_ms.saturating_sub(s.started_ms)))
    }

    /// Close out the active session. Rejected without state change when no
    /// session is active or `target` does not match the active one.
    pub fn stop_at(
        &mut self,
        target: TimerTarget,
        now_ms: u64,
    ) -> Result<CompletedSession, StopError> {
        let session = self.active.ok_or(StopError::NotActive)?;
        if session.target != target {
            return Err(StopError::TargetMismatch);
        }
        self.active = None;
        let elapsed_secs = round_secs(now_ms.saturating_sub(session.started_ms)).max(1);
        Ok(CompletedSession {
            target,
            elapsed_secs,
            minutes: minute_add(elapsed_secs),
        })
    }
}

/// Minutes credited for a session: `max(1, round(elapsed / 60))`.
pub(crate) fn minute_add(elapsed_secs: u64) -> u64 {
    ((elapsed_secs + 30) / 60).max(1)
}

fn round_secs(delta_ms: u64) -> u64 {
    (delta_ms + 500) / 1000
}

/// Current wall clock in epoch milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
