//! The session context: one object owning every component, exposing the
//! command surface the presentation layer drives.
//!
//! Commands are synchronous and run to completion; there is exactly one
//! actor, so no locking is needed anywhere. Clock-dependent commands have
//! `*_at(now_ms)` twins so tests can drive a conceptual clock; the plain
//! variants read the wall clock.

use chrono::Utc;

use crate::config::GoalsConfig;
use crate::entry::{Category, EntryId, EntryStore, MarkOutcome};
use crate::events::Event;
use crate::feed::{resolve_view, CursorPosition, FeedItem, FeedKind, FeedNav};
use crate::notice::NoticeSlot;
use crate::stats::{Period, PeriodStats, StatsBoard};
use crate::timer::{now_ms, PrayerTimer, TargetKind, TimerTarget};

/// All session state: entry store, aggregates, timer, cursors, notice slot.
#[derive(Debug, Clone)]
pub struct SessionContext {
    store: EntryStore,
    stats: StatsBoard,
    timer: PrayerTimer,
    nav: FeedNav,
    notice: NoticeSlot,
}

impl SessionContext {
    /// A session with an empty store.
    pub fn new(config: &GoalsConfig) -> Self {
        Self {
            store: EntryStore::new(),
            stats: StatsBoard::new(config),
            timer: PrayerTimer::new(),
            nav: FeedNav::default(),
            notice: NoticeSlot::new(),
        }
    }

    /// A session pre-populated with the prototype seed content.
    pub fn seeded(config: &GoalsConfig) -> Self {
        Self::seeded_at(config, now_ms())
    }

    pub fn seeded_at(config: &GoalsConfig, now_ms: u64) -> Self {
        let mut session = Self::new(config);
        session.store = EntryStore::seeded(now_ms);
        session
            .stats
            .seed_needs_covered(crate::seed::SEEDED_NEEDS_COVERED);
        session
    }

    // ── Timer commands ───────────────────────────────────────────────

    pub fn start_timer(&mut self, id: EntryId, kind: TargetKind) -> Event {
        self.start_timer_at(id, kind, now_ms())
    }

    /// Begin a timed session. Always succeeds; any stale unread notice is
    /// dropped so the next pop reflects this interaction.
    pub fn start_timer_at(&mut self, id: EntryId, kind: TargetKind, now_ms: u64) -> Event {
        self.notice.clear();
        self.timer.start_at(TimerTarget { id, kind }, now_ms);
        Event::TimerStarted {
            id,
            kind,
            at: Utc::now(),
        }
    }

    pub fn stop_timer(&mut self, id: EntryId, kind: TargetKind) -> Option<Event> {
        self.stop_timer_at(id, kind, now_ms())
    }

    /// Close out the timed session against the matching target. On a
    /// mismatch (or no active session) the rejection is reported through
    /// the notice slot and nothing changes.
    pub fn stop_timer_at(&mut self, id: EntryId, kind: TargetKind, now_ms: u64) -> Option<Event> {
        let target = TimerTarget { id, kind };
        let done = match self.timer.stop_at(target, now_ms) {
            Ok(done) => done,
            Err(rejection) => {
                self.notice.push(rejection.to_string());
                return None;
            }
        };
        self.stats.record_session(kind, done.elapsed_secs);
        if kind == TargetKind::Shared && !self.store.record_prayer(id, done.minutes) {
            self.notice.push("Prayer not found");
        }
        // Pushed last: the completion message wins the single slot.
        self.notice
            .push(format!("Recorded · {}s", done.elapsed_secs));
        Some(Event::TimerStopped {
            id,
            kind,
            elapsed_secs: done.elapsed_secs,
            minutes_added: done.minutes,
            at: Utc::now(),
        })
    }

    pub fn query_elapsed(&self) -> Option<u64> {
        self.query_elapsed_at(now_ms())
    }

    /// Live elapsed seconds of the active session, if any. Pure read.
    pub fn query_elapsed_at(&self, now_ms: u64) -> Option<u64> {
        self.timer.elapsed_secs_at(now_ms)
    }

    // ── Entry commands ───────────────────────────────────────────────

    pub fn add_shared_entry(&mut self, text: &str, category: Category, anon: bool) -> Event {
        self.add_shared_entry_at(text, category, anon, now_ms())
    }

    pub fn add_shared_entry_at(
        &mut self,
        text: &str,
        category: Category,
        anon: bool,
        now_ms: u64,
    ) -> Event {
        let id = self.store.add_shared(text, category, anon, now_ms);
        self.notice.push("Shared with Church");
        Event::EntryShared {
            id,
            category,
            anon,
            at: Utc::now(),
        }
    }

    pub fn add_journal_entry(&mut self, text: &str, category: Category) -> Event {
        self.add_journal_entry_at(text, category, now_ms())
    }

    pub fn add_journal_entry_at(&mut self, text: &str, category: Category, now_ms: u64) -> Event {
        let id = self.store.add_journal(text, category, now_ms);
        self.notice.push("Saved to Journal");
        Event::JournalSaved {
            id,
            category,
            at: Utc::now(),
        }
    }

    /// Flip a shared entry to answered. Idempotent; a second call changes
    /// nothing and reports nothing.
    pub fn mark_answered(&mut self, id: EntryId, note: Option<String>) -> Option<Event> {
        match self.store.mark_answered(id, note) {
            MarkOutcome::Marked => {
                self.notice.push("Marked as answered");
                Some(Event::EntryAnswered { id, at: Utc::now() })
            }
            MarkOutcome::AlreadyAnswered | MarkOutcome::Journal => None,
            MarkOutcome::NotFound => {
                self.notice.push("Prayer not found");
                None
            }
        }
    }

    pub fn share_journal_to_feed(&mut self, journal_id: EntryId) -> Option<Event> {
        self.share_journal_to_feed_at(journal_id, now_ms())
    }

    pub fn share_journal_to_feed_at(&mut self, journal_id: EntryId, now_ms: u64) -> Option<Event> {
        match self.store.share_journal(journal_id, now_ms) {
            Some(id) => {
                self.notice.push("Shared with Church");
                Some(Event::JournalShared {
                    journal_id,
                    id,
                    at: Utc::now(),
                })
            }
            None => {
                self.notice.push("Journal entry not found");
                None
            }
        }
    }

    /// Toggle a bookmark on any entry, shared or journal.
    pub fn toggle_bookmark(&mut self, id: EntryId) -> Option<Event> {
        match self.store.toggle_bookmark(id) {
            Some(bookmarked) => {
                self.notice.push(if bookmarked {
                    "Prayer bookmarked"
                } else {
                    "Bookmark removed"
                });
                Some(Event::BookmarkToggled {
                    id,
                    bookmarked,
                    at: Utc::now(),
                })
            }
            None => {
                self.notice.push("Prayer not found");
                None
            }
        }
    }

    pub fn post_update(&mut self, id: EntryId, text: &str) -> Option<Event> {
        self.post_update_at(id, text, now_ms())
    }

    /// Post a follow-up note to a shared entry. Blank text is ignored
    /// outright, with no notice.
    pub fn post_update_at(&mut self, id: EntryId, text: &str, now_ms: u64) -> Option<Event> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if !self.store.post_update(id, text, now_ms) {
            self.notice.push("Prayer not found");
            return None;
        }
        self.notice.push("Update posted");
        Some(Event::UpdatePosted { id, at: Utc::now() })
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn select_period(&self, period: Period) -> &PeriodStats {
        self.stats.period(period)
    }

    /// Derive the requested view and re-clamp its cursor against the
    /// current length.
    pub fn feed_view(&mut self, kind: FeedKind) -> Vec<FeedItem> {
        let view = resolve_view(&self.store, kind);
        self.nav.cursor_mut(kind).clamp(view.len());
        view
    }

    pub fn cursor_advance(&mut self, kind: FeedKind, step: i64) -> CursorPosition {
        let len = resolve_view(&self.store, kind).len();
        let index = self.nav.cursor_mut(kind).advance(step, len);
        CursorPosition { index, len }
    }

    pub fn cursor_position(&mut self, kind: FeedKind) -> CursorPosition {
        let len = resolve_view(&self.store, kind).len();
        let index = self.nav.cursor_mut(kind).clamp(len);
        CursorPosition { index, len }
    }

    pub fn pop_notice(&mut self) -> Option<String> {
        self.notice.consume()
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn timer_active(&self) -> bool {
        self.timer.is_active()
    }
}
