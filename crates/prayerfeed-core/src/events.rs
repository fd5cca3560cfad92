use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::{Category, EntryId};
use crate::timer::TargetKind;

/// Every successful command produces an Event.
/// The presentation layer renders them; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        id: EntryId,
        kind: TargetKind,
        at: DateTime<Utc>,
    },
    TimerStopped {
        id: EntryId,
        kind: TargetKind,
        elapsed_secs: u64,
        minutes_added: u64,
        at: DateTime<Utc>,
    },
    EntryShared {
        id: EntryId,
        category: Category,
        anon: bool,
        at: DateTime<Utc>,
    },
    JournalSaved {
        id: EntryId,
        category: Category,
        at: DateTime<Utc>,
    },
    /// A journal entry was copied into the shared feed.
    JournalShared {
        journal_id: EntryId,
        id: EntryId,
        at: DateTime<Utc>,
    },
    EntryAnswered {
        id: EntryId,
        at: DateTime<Utc>,
    },
    BookmarkToggled {
        id: EntryId,
        bookmarked: bool,
        at: DateTime<Utc>,
    },
    /// A follow-up note was posted to a shared entry.
    UpdatePosted {
        id: EntryId,
        at: DateTime<Utc>,
    },
}
