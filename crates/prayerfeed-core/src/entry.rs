//! Prayer request and journal entry storage.
//!
//! The store owns both collections behind the feed: shared prayer requests
//! visible to the whole church, and private journal entries. New entries go
//! to the front, matching the prototype feed order (most recent first).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

const HOUR_MS: u64 = 3_600_000;
const DAY_MS: u64 = 86_400_000;

/// Identifier for a shared or journal entry.
///
/// Ids are epoch-millisecond based and strictly increasing within a session,
/// so a later entry always has a larger id than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Prayer category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Health,
    Family,
    Work,
    Gratitude,
    Spiritual,
    Struggles,
    Other,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "family" => Ok(Category::Family),
            "work" => Ok(Category::Work),
            "gratitude" => Ok(Category::Gratitude),
            "spiritual" => Ok(Category::Spiritual),
            "struggles" => Ok(Category::Struggles),
            "other" => Ok(Category::Other),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A prayer request shared with the community feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerEntry {
    pub id: EntryId,
    pub author: String,
    pub category: Category,
    pub text: String,
    /// Creation time, epoch milliseconds. Display labels are derived from it.
    pub created_ms: u64,
    /// How many completed prayer sessions this entry has received.
    pub prayer_count: u32,
    /// Total minutes of prayer recorded against this entry.
    pub prayer_minutes: u64,
    /// Whether the current user posted this entry.
    pub mine: bool,
    pub anon: bool,
    pub answered: bool,
    /// Optional testimony attached when the entry is marked answered.
    #[serde(default)]
    pub answer_note: Option<String>,
    /// Follow-up notes posted after the entry was shared, oldest first.
    #[serde(default)]
    pub updates: Vec<UpdateNote>,
}

/// A follow-up note posted to a shared entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNote {
    pub text: String,
    pub created_ms: u64,
}

/// A private reflection entry. Never exposed to communal counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub category: Category,
    pub text: String,
    pub created_ms: u64,
}

/// Outcome of [`EntryStore::mark_answered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Entry flipped from unanswered to answered.
    Marked,
    /// Entry was already answered; nothing changed.
    AlreadyAnswered,
    /// The id belongs to a journal entry; journal entries are never answered.
    Journal,
    /// No entry with this id exists.
    NotFound,
}

/// Owns the shared feed and the private journal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryStore {
    prayers: Vec<PrayerEntry>,
    journal: Vec<JournalEntry>,
    bookmarks: Vec<EntryId>,
    last_id: u64,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the prototype seed content.
    pub fn seeded(now_ms: u64) -> Self {
        crate::seed::seeded_store(now_ms)
    }

    pub(crate) fn insert_seed_prayer(&mut self, entry: PrayerEntry) {
        self.last_id = self.last_id.max(entry.id.0);
        self.prayers.push(entry);
    }

    pub(crate) fn insert_seed_journal(&mut self, entry: JournalEntry) {
        self.last_id = self.last_id.max(entry.id.0);
        self.journal.push(entry);
    }

    /// Issue a fresh id, strictly greater than every id issued before it.
    fn next_id(&mut self, now_ms: u64) -> EntryId {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        EntryId(id)
    }

    /// Share a new prayer request. Inserted at the front of the feed with
    /// zero counters.
    pub fn add_shared(
        &mut self,
        text: impl Into<String>,
        category: Category,
        anon: bool,
        now_ms: u64,
    ) -> EntryId {
        let id = self.next_id(now_ms);
        let author = if anon { "A Church Member" } else { "You" };
        self.prayers.insert(
            0,
            PrayerEntry {
                id,
                author: author.to_string(),
                category,
                text: text.into(),
                created_ms: now_ms,
                prayer_count: 0,
                prayer_minutes: 0,
                mine: true,
                anon,
                answered: false,
                answer_note: None,
                updates: Vec::new(),
            },
        );
        id
    }

    /// Save a new private journal entry at the front of the journal.
    pub fn add_journal(
        &mut self,
        text: impl Into<String>,
        category: Category,
        now_ms: u64,
    ) -> EntryId {
        let id = self.next_id(now_ms);
        self.journal.insert(
            0,
            JournalEntry {
                id,
                category,
                text: text.into(),
                created_ms: now_ms,
            },
        );
        id
    }

    /// Flip a shared entry to answered. One-way: a second call is a no-op.
    pub fn mark_answered(&mut self, id: EntryId, note: Option<String>) -> MarkOutcome {
        if let Some(entry) = self.prayers.iter_mut().find(|p| p.id == id) {
            if entry.answered {
                return MarkOutcome::AlreadyAnswered;
            }
            entry.answered = true;
            entry.answer_note = note.filter(|n| !n.trim().is_empty());
            return MarkOutcome::Marked;
        }
        if self.journal.iter().any(|j| j.id == id) {
            return MarkOutcome::Journal;
        }
        MarkOutcome::NotFound
    }

    /// Copy a journal entry into the shared feed as a fresh request.
    /// The journal entry itself is left untouched.
    pub fn share_journal(&mut self, journal_id: EntryId, now_ms: u64) -> Option<EntryId> {
        let (text, category) = {
            let entry = self.journal.iter().find(|j| j.id == journal_id)?;
            (entry.text.clone(), entry.category)
        };
        Some(self.add_shared(text, category, false, now_ms))
    }

    /// Toggle a bookmark on any entry, shared or journal. Returns the new
    /// state, or None when no entry with this id exists.
    pub fn toggle_bookmark(&mut self, id: EntryId) -> Option<bool> {
        if self.prayer(id).is_none() && self.journal_entry(id).is_none() {
            return None;
        }
        if let Some(pos) = self.bookmarks.iter().position(|b| *b == id) {
            self.bookmarks.remove(pos);
            Some(false)
        } else {
            self.bookmarks.insert(0, id);
            Some(true)
        }
    }

    pub fn is_bookmarked(&self, id: EntryId) -> bool {
        self.bookmarks.contains(&id)
    }

    /// Append a follow-up note to a shared entry.
    /// Returns false when no shared entry with this id exists.
    pub fn post_update(&mut self, id: EntryId, text: impl Into<String>, now_ms: u64) -> bool {
        match self.prayers.iter_mut().find(|p| p.id == id) {
            Some(entry) => {
                entry.updates.push(UpdateNote {
                    text: text.into(),
                    created_ms: now_ms,
                });
                true
            }
            None => false,
        }
    }

    /// Record a completed prayer session against a shared entry.
    /// Returns false when no shared entry with this id exists.
    pub fn record_prayer(&mut self, id: EntryId, minutes: u64) -> bool {
        match self.prayers.iter_mut().find(|p| p.id == id) {
            Some(entry) => {
                entry.prayer_count += 1;
                entry.prayer_minutes += minutes;
                true
            }
            None => false,
        }
    }

    pub fn prayers(&self) -> &[PrayerEntry] {
        &self.prayers
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn prayer(&self, id: EntryId) -> Option<&PrayerEntry> {
        self.prayers.iter().find(|p| p.id == id)
    }

    pub fn journal_entry(&self, id: EntryId) -> Option<&JournalEntry> {
        self.journal.iter().find(|j| j.id == id)
    }
}

/// Relative display label for an entry timestamp ("Just now", "5h ago", ...).
pub fn relative_label(created_ms: u64, now_ms: u64) -> String {
    let diff = now_ms.saturating_sub(created_ms);
    if diff < HOUR_MS {
        return "Just now".to_string();
    }
    if diff < DAY_MS {
        return format!("{}h ago", diff / HOUR_MS);
    }
    let days = diff / DAY_MS;
    match days {
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days}d ago"),
        _ => format!("{}w ago", days / 7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut store = EntryStore::new();
        // Same clock reading for every insert.
        let a = store.add_shared("one", Category::Other, false, 1_000);
        let b = store.add_shared("two", Category::Other, false, 1_000);
        let c = store.add_journal("three", Category::Family, 1_000);
        assert!(b > a);
        assert!(c > b);
    }

    #[test]
    fn new_shared_entry_is_front_of_feed_with_zero_counters() {
        let mut store = EntryStore::new();
        store.add_shared("first", Category::Health, false, 1_000);
        let id = store.add_shared("second", Category::Work, false, 2_000);
        let front = &store.prayers()[0];
        assert_eq!(front.id, id);
        assert_eq!(front.prayer_count, 0);
        assert_eq!(front.prayer_minutes, 0);
        assert!(front.mine);
        assert!(!front.answered);
    }

    #[test]
    fn anonymous_entries_get_the_member_label() {
        let mut store = EntryStore::new();
        let id = store.add_shared("quiet need", Category::Struggles, true, 1_000);
        let entry = store.prayer(id).unwrap();
        assert_eq!(entry.author, "A Church Member");
        assert!(entry.anon);
    }

    #[test]
    fn mark_answered_is_one_way() {
        let mut store = EntryStore::new();
        let id = store.add_shared("need", Category::Health, false, 1_000);
        assert_eq!(
            store.mark_answered(id, Some("healed".into())),
            MarkOutcome::Marked
        );
        assert_eq!(store.mark_answered(id, None), MarkOutcome::AlreadyAnswered);
        let entry = store.prayer(id).unwrap();
        assert!(entry.answered);
        assert_eq!(entry.answer_note.as_deref(), Some("healed"));
    }

    #[test]
    fn mark_answered_distinguishes_journal_from_missing() {
        let mut store = EntryStore::new();
        let jid = store.add_journal("private", Category::Family, 1_000);
        assert_eq!(store.mark_answered(jid, None), MarkOutcome::Journal);
        assert_eq!(
            store.mark_answered(EntryId(999_999), None),
            MarkOutcome::NotFound
        );
    }

    #[test]
    fn share_journal_copies_without_mutating_the_journal() {
        let mut store = EntryStore::new();
        let jid = store.add_journal("patience with the kids", Category::Family, 1_000);
        let shared = store.share_journal(jid, 2_000).unwrap();
        assert_eq!(store.journal().len(), 1);
        let entry = store.prayer(shared).unwrap();
        assert_eq!(entry.text, "patience with the kids");
        assert_eq!(entry.category, Category::Family);
        assert!(entry.mine);
        assert_eq!(entry.prayer_count, 0);
        // Original journal entry untouched.
        assert_eq!(store.journal_entry(jid).unwrap().text, "patience with the kids");
    }

    #[test]
    fn record_prayer_bumps_counters_for_shared_only() {
        let mut store = EntryStore::new();
        let id = store.add_shared("need", Category::Health, false, 1_000);
        let jid = store.add_journal("private", Category::Family, 1_000);
        assert!(store.record_prayer(id, 2));
        assert!(store.record_prayer(id, 1));
        assert!(!store.record_prayer(jid, 1));
        let entry = store.prayer(id).unwrap();
        assert_eq!(entry.prayer_count, 2);
        assert_eq!(entry.prayer_minutes, 3);
    }

    #[test]
    fn bookmark_toggles_for_shared_and_journal_entries() {
        let mut store = EntryStore::new();
        let id = store.add_shared("need", Category::Health, false, 1_000);
        let jid = store.add_journal("private", Category::Family, 1_000);
        assert_eq!(store.toggle_bookmark(id), Some(true));
        assert_eq!(store.toggle_bookmark(jid), Some(true));
        assert!(store.is_bookmarked(id));
        assert_eq!(store.toggle_bookmark(id), Some(false));
        assert!(!store.is_bookmarked(id));
        assert_eq!(store.toggle_bookmark(EntryId(999_999)), None);
    }

    #[test]
    fn updates_append_in_posting_order_for_shared_only() {
        let mut store = EntryStore::new();
        let id = store.add_shared("need", Category::Health, false, 1_000);
        let jid = store.add_journal("private", Category::Family, 1_000);
        assert!(store.post_update(id, "first word", 2_000));
        assert!(store.post_update(id, "second word", 3_000));
        assert!(!store.post_update(jid, "nope", 4_000));
        let entry = store.prayer(id).unwrap();
        assert_eq!(entry.updates.len(), 2);
        assert_eq!(entry.updates[0].text, "first word");
        assert_eq!(entry.updates[1].created_ms, 3_000);
    }

    #[test]
    fn relative_labels() {
        let now = 100 * DAY_MS;
        assert_eq!(relative_label(now, now), "Just now");
        assert_eq!(relative_label(now - 5 * HOUR_MS, now), "5h ago");
        assert_eq!(relative_label(now - DAY_MS, now), "Yesterday");
        assert_eq!(relative_label(now - 3 * DAY_MS, now), "3d ago");
        assert_eq!(relative_label(now - 15 * DAY_MS, now), "2w ago");
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!("health".parse::<Category>().unwrap(), Category::Health);
        assert_eq!("Struggles".parse::<Category>().unwrap(), Category::Struggles);
        assert!("praise".parse::<Category>().is_err());
    }
}
