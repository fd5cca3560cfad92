//! Seed content for a fresh session.
//!
//! A trimmed set of the prototype's seed prayers and journal entries, so an
//! interactive session starts with a living feed, an answered wall and a
//! journal to share from. Timestamps are offsets from the session clock.

use crate::entry::{Category, EntryId, EntryStore, JournalEntry, PrayerEntry, UpdateNote};

const HOUR_MS: u64 = 3_600_000;
const DAY_MS: u64 = 86_400_000;

/// Seed value for the `church_needs_covered` counter: distinct seeded needs
/// with recorded prayer activity.
pub(crate) const SEEDED_NEEDS_COVERED: u64 = 2;

struct SeedPrayer {
    id: u64,
    author: &'static str,
    category: Category,
    text: &'static str,
    age_ms: u64,
    mine: bool,
    anon: bool,
    answered: bool,
    answer_note: Option<&'static str>,
    prayer_count: u32,
    prayer_minutes: u64,
    updates: &'static [SeedUpdate],
}

struct SeedUpdate {
    text: &'static str,
    age_ms: u64,
}

const SEED_PRAYERS: &[SeedPrayer] = &[
    SeedPrayer {
        id: 1,
        author: "Sarah M.",
        category: Category::Health,
        text: "Please pray for my mom's surgery tomorrow morning. She's having a double bypass and she's scared. We trust God's plan, but we'd love prayer for the surgeons and a smooth recovery.",
        age_ms: 2 * HOUR_MS,
        mine: false,
        anon: false,
        answered: false,
        answer_note: None,
        prayer_count: 12,
        prayer_minutes: 18,
        updates: &[],
    },
    SeedPrayer {
        id: 2,
        author: "A Church Member",
        category: Category::Family,
        text: "Going through a really difficult season in my marriage. We're both believers but struggling to communicate. Praying for restoration and wisdom.",
        age_ms: 5 * HOUR_MS,
        mine: false,
        anon: true,
        answered: false,
        answer_note: None,
        prayer_count: 7,
        prayer_minutes: 11,
        updates: &[],
    },
    SeedPrayer {
        id: 3,
        author: "You",
        category: Category::Spiritual,
        text: "Praying for our church leadership as they transition into this new season. For wisdom, protection, and a deep unity in the Spirit.",
        age_ms: HOUR_MS,
        mine: true,
        anon: false,
        answered: false,
        answer_note: None,
        prayer_count: 0,
        prayer_minutes: 0,
        updates: &[],
    },
    SeedPrayer {
        id: 4,
        author: "James K.",
        category: Category::Work,
        text: "I was laid off last Friday after 12 years. Feeling lost but trusting God has a plan. Prayers for provision and for the right doors to open.",
        age_ms: 8 * HOUR_MS,
        mine: false,
        anon: false,
        answered: false,
        answer_note: None,
        prayer_count: 0,
        prayer_minutes: 0,
        updates: &[],
    },
    SeedPrayer {
        id: 5,
        author: "A Church Member",
        category: Category::Struggles,
        text: "Battling anxiety that won't let go. Some days I can barely get out of bed. I know God is with me but I need my church family to carry this with me.",
        age_ms: DAY_MS,
        mine: false,
        anon: true,
        answered: false,
        answer_note: None,
        prayer_count: 0,
        prayer_minutes: 0,
        updates: &[],
    },
    SeedPrayer {
        id: 8,
        author: "You",
        category: Category::Health,
        text: "Asking for prayers as I deal with some ongoing back pain that's been affecting my ability to work and be present with my family. Trusting God for healing.",
        age_ms: 4 * DAY_MS,
        mine: true,
        anon: false,
        answered: false,
        answer_note: None,
        prayer_count: 0,
        prayer_minutes: 0,
        updates: &[SeedUpdate {
            text: "Had an MRI yesterday -- waiting on results. Appreciate the continued prayers.",
            age_ms: 2 * DAY_MS,
        }],
    },
    SeedPrayer {
        id: 6,
        author: "Rachel W.",
        category: Category::Health,
        text: "Please pray for my daughter Emma. She's been in the hospital for three days with a high fever they can't explain.",
        age_ms: 10 * DAY_MS,
        mine: false,
        anon: false,
        answered: true,
        answer_note: Some("Emma is home and healthy! The fever broke on day four. Thank you for every prayer -- we felt them all."),
        prayer_count: 0,
        prayer_minutes: 0,
        updates: &[],
    },
    SeedPrayer {
        id: 7,
        author: "Mark D.",
        category: Category::Work,
        text: "Interview tomorrow for a position I've been praying about for months. Pray for favor and peace.",
        age_ms: 12 * DAY_MS,
        mine: false,
        anon: false,
        answered: true,
        answer_note: Some("I got the job! Starting next month. God's timing is perfect."),
        prayer_count: 0,
        prayer_minutes: 0,
        updates: &[],
    },
];

struct SeedJournal {
    id: u64,
    category: Category,
    text: &'static str,
    age_ms: u64,
}

const SEED_JOURNAL: &[SeedJournal] = &[
    SeedJournal {
        id: 101,
        category: Category::Family,
        text: "Give me patience with the kids this week. Help me be the parent they need when I'm tired after work.",
        age_ms: 3 * HOUR_MS,
    },
    SeedJournal {
        id: 102,
        category: Category::Gratitude,
        text: "Thank you for Mia's safety. Continue to watch over her wherever she goes.",
        age_ms: 4 * DAY_MS,
    },
    SeedJournal {
        id: 103,
        category: Category::Struggles,
        text: "I keep losing my temper with the people I love most. Lord, change my heart. Give me self-control and gentleness.",
        age_ms: DAY_MS,
    },
];

pub(crate) fn seeded_store(now_ms: u64) -> EntryStore {
    let mut store = EntryStore::new();
    for seed in SEED_PRAYERS {
        store.insert_seed_prayer(PrayerEntry {
            id: EntryId(seed.id),
            author: seed.author.to_string(),
            category: seed.category,
            text: seed.text.to_string(),
            created_ms: now_ms.saturating_sub(seed.age_ms),
            prayer_count: seed.prayer_count,
            prayer_minutes: seed.prayer_minutes,
            mine: seed.mine,
            anon: seed.anon,
            answered: seed.answered,
            answer_note: seed.answer_note.map(str::to_string),
            updates: seed
                .updates
                .iter()
                .map(|u| UpdateNote {
                    text: u.text.to_string(),
                    created_ms: now_ms.saturating_sub(u.age_ms),
                })
                .collect(),
        });
    }
    for seed in SEED_JOURNAL {
        store.insert_seed_journal(JournalEntry {
            id: EntryId(seed.id),
            category: seed.category,
            text: seed.text.to_string(),
            created_ms: now_ms.saturating_sub(seed.age_ms),
        });
    }
    store
}
