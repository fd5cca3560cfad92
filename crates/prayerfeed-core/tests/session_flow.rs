//! End-to-end session flows through the command surface.

use prayerfeed_core::entry::EntryId;
use prayerfeed_core::events::Event;
use prayerfeed_core::feed::FeedKind;
use prayerfeed_core::stats::Period;
use prayerfeed_core::timer::TargetKind;
use prayerfeed_core::{Category, GoalsConfig, SessionContext};

const T0: u64 = 1_700_000_000_000;

fn fresh() -> SessionContext {
    SessionContext::new(&GoalsConfig::default())
}

fn shared_id(event: Event) -> EntryId {
    match event {
        Event::EntryShared { id, .. } => id,
        other => panic!("expected EntryShared, got {other:?}"),
    }
}

#[test]
fn timed_session_credits_entry_and_every_period() {
    // Seed entry 1 starts with 12 prayers / 18 minutes.
    let mut s = SessionContext::seeded_at(&GoalsConfig::default(), T0);
    let id = EntryId(1);

    s.start_timer_at(id, TargetKind::Shared, T0);
    assert_eq!(s.query_elapsed_at(T0 + 30_000), Some(30));

    let event = s.stop_timer_at(id, TargetKind::Shared, T0 + 125_000).unwrap();
    match event {
        Event::TimerStopped {
            elapsed_secs,
            minutes_added,
            ..
        } => {
            assert_eq!(elapsed_secs, 125);
            assert_eq!(minutes_added, 2); // round(125 / 60)
        }
        other => panic!("expected TimerStopped, got {other:?}"),
    }

    let entry = s.store().prayer(id).unwrap();
    assert_eq!(entry.prayer_count, 13);
    assert_eq!(entry.prayer_minutes, 20);

    for period in Period::ALL {
        let stats = s.select_period(period);
        assert_eq!(stats.church_prayers, 1);
        assert_eq!(stats.church_minutes, 2);
        assert_eq!(stats.personal_prayers, 0);
    }
    assert_eq!(s.pop_notice().as_deref(), Some("Recorded · 125s"));
}

#[test]
fn mismatched_stop_is_rejected_and_session_survives() {
    let mut s = fresh();
    let a = shared_id(s.add_shared_entry_at("need a", Category::Health, false, T0));
    let b = shared_id(s.add_shared_entry_at("need b", Category::Work, false, T0));

    s.start_timer_at(a, TargetKind::Shared, T0);
    assert!(s.stop_timer_at(b, TargetKind::Shared, T0 + 10_000).is_none());

    assert_eq!(
        s.pop_notice().as_deref(),
        Some("A different prayer is being timed")
    );
    assert!(s.timer_active());
    assert_eq!(s.select_period(Period::Day).church_prayers, 0);

    // The correct target still stops cleanly afterwards.
    assert!(s.stop_timer_at(a, TargetKind::Shared, T0 + 20_000).is_some());
    assert!(!s.timer_active());
}

#[test]
fn stop_without_active_session_only_pushes_a_notice() {
    let mut s = fresh();
    assert!(s.stop_timer_at(EntryId(1), TargetKind::Shared, T0).is_none());
    assert_eq!(s.pop_notice().as_deref(), Some("No prayer in progress"));
    assert_eq!(s.select_period(Period::Day).church_prayers, 0);
}

#[test]
fn answered_view_goes_from_empty_state_to_one_of_one() {
    let mut s = fresh();
    let pos = s.cursor_position(FeedKind::Answered);
    assert_eq!((pos.index, pos.len), (0, 0));

    let id = shared_id(s.add_shared_entry_at("need", Category::Health, false, T0));
    assert!(s.mark_answered(id, Some("answered!".into())).is_some());

    let pos = s.cursor_position(FeedKind::Answered);
    assert_eq!((pos.index, pos.len), (0, 1));
    let view = s.feed_view(FeedKind::Answered);
    assert_eq!(view[0].id, id);
    assert_eq!(view[0].answer_note.as_deref(), Some("answered!"));
    assert!(s.feed_view(FeedKind::Active).is_empty());
}

#[test]
fn cursor_reclamps_when_the_view_shrinks() {
    let mut s = fresh();
    let ids: Vec<_> = (0..3)
        .map(|i| shared_id(s.add_shared_entry_at(&format!("need {i}"), Category::Other, false, T0)))
        .collect();

    s.cursor_advance(FeedKind::Active, 1);
    let pos = s.cursor_advance(FeedKind::Active, 1);
    assert_eq!((pos.index, pos.len), (2, 3));

    // Answering two entries shrinks the active view under the cursor.
    s.mark_answered(ids[0], None);
    s.mark_answered(ids[1], None);
    let pos = s.cursor_position(FeedKind::Active);
    assert_eq!((pos.index, pos.len), (0, 1));
}

#[test]
fn advance_is_clamped_at_both_boundaries() {
    let mut s = fresh();
    shared_id(s.add_shared_entry_at("only", Category::Other, false, T0));
    let pos = s.cursor_advance(FeedKind::Active, -1);
    assert_eq!(pos.index, 0);
    let pos = s.cursor_advance(FeedKind::Active, 1);
    assert_eq!(pos.index, 0);
}

#[test]
fn pop_notice_consumes_once() {
    let mut s = fresh();
    s.add_journal_entry_at("reflect", Category::Gratitude, T0);
    assert_eq!(s.pop_notice().as_deref(), Some("Saved to Journal"));
    assert_eq!(s.pop_notice(), None);
}

#[test]
fn sharing_a_journal_entry_grows_the_feed_not_the_journal() {
    let mut s = SessionContext::seeded_at(&GoalsConfig::default(), T0);
    let journal_before = s.feed_view(FeedKind::Journal).len();
    let active_before = s.feed_view(FeedKind::Active).len();

    let journal_id = s.feed_view(FeedKind::Journal)[0].id;
    let event = s.share_journal_to_feed_at(journal_id, T0 + 1_000).unwrap();
    let new_id = match event {
        Event::JournalShared { id, .. } => id,
        other => panic!("expected JournalShared, got {other:?}"),
    };

    assert_eq!(s.feed_view(FeedKind::Journal).len(), journal_before);
    let active = s.feed_view(FeedKind::Active);
    assert_eq!(active.len(), active_before + 1);
    // The copy leads the feed with fresh counters.
    assert_eq!(active[0].id, new_id);
    assert_eq!(active[0].prayer_count, 0);
    assert!(active[0].mine);
}

#[test]
fn posted_update_rides_along_in_feed_views() {
    let mut s = SessionContext::seeded_at(&GoalsConfig::default(), T0);
    let id = s.feed_view(FeedKind::Active)[0].id;
    assert!(s.post_update_at(id, "still waiting on results", T0 + 1_000).is_some());
    assert_eq!(s.pop_notice().as_deref(), Some("Update posted"));
    let view = s.feed_view(FeedKind::Active);
    let item = view.iter().find(|i| i.id == id).unwrap();
    assert_eq!(item.updates.last().unwrap().text, "still waiting on results");
}

#[test]
fn bookmarks_view_collects_saved_entries_across_collections() {
    let mut s = SessionContext::seeded_at(&GoalsConfig::default(), T0);
    assert!(s.feed_view(FeedKind::Bookmarks).is_empty());

    let prayer_id = s.feed_view(FeedKind::Active)[0].id;
    let journal_id = s.feed_view(FeedKind::Journal)[0].id;
    s.toggle_bookmark(prayer_id);
    s.toggle_bookmark(journal_id);
    assert_eq!(s.feed_view(FeedKind::Bookmarks).len(), 2);

    // Removing one shrinks the view under its cursor.
    s.cursor_advance(FeedKind::Bookmarks, 1);
    s.toggle_bookmark(journal_id);
    let pos = s.cursor_position(FeedKind::Bookmarks);
    assert_eq!((pos.index, pos.len), (0, 1));
}

#[test]
fn seeded_session_exposes_the_answered_wall() {
    let mut s = SessionContext::seeded_at(&GoalsConfig::default(), T0);
    let wall = s.feed_view(FeedKind::Answered);
    assert_eq!(wall.len(), 2);
    assert!(wall.iter().all(|item| item.answered));
    assert!(wall.iter().all(|item| item.answer_note.is_some()));
    // Needs-covered is seed data; sessions never move it.
    s.start_timer_at(wall[0].id, TargetKind::Shared, T0);
    s.stop_timer_at(wall[0].id, TargetKind::Shared, T0 + 60_000);
    assert_eq!(s.select_period(Period::Day).church_needs_covered, 2);
}

#[test]
fn custom_goals_scale_into_period_snapshots() {
    let config =
        GoalsConfig::from_toml("[church]\nminutes = 20\nprayers = 4\n[personal]\nentries = 2\n")
            .unwrap();
    let s = SessionContext::new(&config);
    assert_eq!(s.select_period(Period::Day).goals.church_minutes, 20);
    assert_eq!(s.select_period(Period::Week).goals.church_minutes, 140);
    assert_eq!(s.select_period(Period::Year).goals.church_prayers, 1460);
    assert_eq!(s.select_period(Period::Week).goals.personal_prayers, 14);
}

#[test]
fn restarting_the_timer_abandons_the_previous_target() {
    let mut s = fresh();
    let a = shared_id(s.add_shared_entry_at("a", Category::Other, false, T0));
    let b = shared_id(s.add_shared_entry_at("b", Category::Other, false, T0));

    s.start_timer_at(a, TargetKind::Shared, T0);
    s.start_timer_at(b, TargetKind::Shared, T0 + 300_000);

    // The abandoned target no longer matches.
    assert!(s.stop_timer_at(a, TargetKind::Shared, T0 + 360_000).is_none());
    let event = s.stop_timer_at(b, TargetKind::Shared, T0 + 360_000).unwrap();
    match event {
        Event::TimerStopped { elapsed_secs, .. } => assert_eq!(elapsed_secs, 60),
        other => panic!("expected TimerStopped, got {other:?}"),
    }
    // Only the completed session was counted.
    assert_eq!(s.select_period(Period::Day).church_prayers, 1);
}
