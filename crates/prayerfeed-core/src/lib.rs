//! # PrayerFeed Core Library
//!
//! Core business logic for the PrayerFeed prayer-tracking prototype: a
//! single-actor, in-memory session engine. The CLI binary (and any other
//! presentation layer) is a thin shell over [`SessionContext`], which
//! dispatches every user command synchronously to the owned components.
//!
//! ## Key Components
//!
//! - [`EntryStore`]: shared prayer requests and the private journal
//! - [`StatsBoard`]: day/week/year aggregates with immutable goals
//! - [`PrayerTimer`]: wall-clock hold-to-pray state machine
//! - [`FeedNav`]: bounded cursors over live-filtered feed views
//! - [`NoticeSlot`]: single-slot last-write-wins notice holder
//!
//! Nothing is persisted: session state lives and dies with the process.

pub mod config;
pub mod entry;
pub mod error;
pub mod events;
pub mod feed;
pub mod notice;
pub mod session;
pub mod stats;
pub mod timer;

mod seed;

pub use config::GoalsConfig;
pub use entry::{Category, EntryId, EntryStore, JournalEntry, PrayerEntry, UpdateNote};
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use feed::{CursorPosition, FeedItem, FeedKind, FeedNav};
pub use notice::NoticeSlot;
pub use session::SessionContext;
pub use stats::{Period, PeriodStats, StatsBoard};
pub use timer::{PrayerTimer, TargetKind, TimerTarget};
