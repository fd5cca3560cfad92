//! Feed views and cursor navigation.
//!
//! Views are derived from the store on every read; nothing is cached. The
//! cursor is a plain index, clamped into the current view bounds each time
//! it is read or moved, so it can never dangle past the end after an entry
//! is added or re-filtered away.

use serde::{Deserialize, Serialize};

use crate::entry::{EntryId, EntryStore, JournalEntry, PrayerEntry, UpdateNote};
use crate::timer::TargetKind;

/// Which derived view of the store to navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    /// Shared entries still awaiting an answer.
    Active,
    /// Shared entries marked answered (the prayer wall).
    Answered,
    /// Private journal entries.
    Journal,
    /// Bookmarked entries, spanning the shared feed and the journal.
    Bookmarks,
}

impl std::str::FromStr for FeedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(FeedKind::Active),
            "answered" => Ok(FeedKind::Answered),
            "journal" => Ok(FeedKind::Journal),
            "bookmarks" => Ok(FeedKind::Bookmarks),
            other => Err(format!("unknown view: {other}")),
        }
    }
}

/// One row of a derived view, ready for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: EntryId,
    pub kind: TargetKind,
    pub category: crate::entry::Category,
    pub text: String,
    pub created_ms: u64,
    /// Author label; journal entries have none.
    pub author: Option<String>,
    pub anon: bool,
    pub mine: bool,
    pub answered: bool,
    pub answer_note: Option<String>,
    pub prayer_count: u32,
    pub prayer_minutes: u64,
    pub bookmarked: bool,
    /// Follow-up notes on shared entries, oldest first.
    pub updates: Vec<UpdateNote>,
}

impl From<&PrayerEntry> for FeedItem {
    fn from(entry: &PrayerEntry) -> Self {
        Self {
            id: entry.id,
            kind: TargetKind::Shared,
            category: entry.category,
            text: entry.text.clone(),
            created_ms: entry.created_ms,
            author: Some(entry.author.clone()),
            anon: entry.anon,
            mine: entry.mine,
            answered: entry.answered,
            answer_note: entry.answer_note.clone(),
            prayer_count: entry.prayer_count,
            prayer_minutes: entry.prayer_minutes,
            bookmarked: false,
            updates: entry.updates.clone(),
        }
    }
}

impl From<&JournalEntry> for FeedItem {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id,
            kind: TargetKind::Journal,
            category: entry.category,
            text: entry.text.clone(),
            created_ms: entry.created_ms,
            author: None,
            anon: false,
            mine: true,
            answered: false,
            answer_note: None,
            prayer_count: 0,
            prayer_minutes: 0,
            bookmarked: false,
            updates: Vec::new(),
        }
    }
}

/// Re-filter the store into the requested view, in store order.
pub fn resolve_view(store: &EntryStore, kind: FeedKind) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = match kind {
        FeedKind::Active => store
            .prayers()
            .iter()
            .filter(|p| !p.answered)
            .map(FeedItem::from)
            .collect(),
        FeedKind::Answered => store
            .prayers()
            .iter()
            .filter(|p| p.answered)
            .map(FeedItem::from)
            .collect(),
        FeedKind::Journal => store.journal().iter().map(FeedItem::from).collect(),
        FeedKind::Bookmarks => store
            .prayers()
            .iter()
            .filter(|p| store.is_bookmarked(p.id))
            .map(FeedItem::from)
            .chain(
                store
                    .journal()
                    .iter()
                    .filter(|j| store.is_bookmarked(j.id))
                    .map(FeedItem::from),
            )
            .collect(),
    };
    for item in &mut items {
        item.bookmarked = store.is_bookmarked(item.id);
    }
    items
}

/// Cursor position report: `index` is always within `[0, len-1]`, or 0 when
/// the view is empty (`len == 0` is the explicit empty-state signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub index: usize,
    pub len: usize,
}

/// Bounded index into one derived view.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FeedCursor {
    index: usize,
}

impl FeedCursor {
    /// Pull the index back into `[0, len-1]`; 0 for an empty view.
    pub fn clamp(&mut self, len: usize) -> usize {
        if len == 0 {
            self.index = 0;
        } else if self.index > len - 1 {
            self.index = len - 1;
        }
        self.index
    }

    /// Move one step in either direction, clamped. A step past either
    /// boundary is a no-op.
    pub fn advance(&mut self, step: i64, len: usize) -> usize {
        self.clamp(len);
        if len == 0 {
            return 0;
        }
        let next = self.index as i64 + step;
        self.index = next.clamp(0, len as i64 - 1) as usize;
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// One cursor per view kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedNav {
    active: FeedCursor,
    answered: FeedCursor,
    journal: FeedCursor,
    bookmarks: FeedCursor,
}

impl FeedNav {
    pub fn cursor_mut(&mut self, kind: FeedKind) -> &mut FeedCursor {
        match kind {
            FeedKind::Active => &mut self.active,
            FeedKind::Answered => &mut self.answered,
            FeedKind::Journal => &mut self.journal,
            FeedKind::Bookmarks => &mut self.bookmarks,
        }
    }
}
