//! Interactive session loop.
//!
//! Reads one command per line from stdin and drives a single
//! [`SessionContext`] to completion. Events and snapshots go to stdout as
//! pretty JSON; notices and errors go to stderr, so stdout stays
//! machine-readable.

use std::io::BufRead;
use std::path::Path;

use prayerfeed_core::entry::{relative_label, EntryId};
use prayerfeed_core::feed::{FeedItem, FeedKind};
use prayerfeed_core::stats::Period;
use prayerfeed_core::timer::{now_ms, TargetKind};
use prayerfeed_core::{Category, CoreError, SessionContext};

const HELP: &str = "\
commands:
  share <category> [--anon] <text...>   share a prayer need with the church
  journal <category> <text...>          save a private journal entry
  start <shared|journal> <id>           begin timing a prayer
  stop <shared|journal> <id>            finish the timed prayer
  elapsed                               live seconds of the active prayer
  answered <id> [note...]               mark a shared entry answered
  bookmark <id>                         save or unsave an entry
  update <id> <text...>                 post a follow-up to a shared entry
  share-journal <journal-id>            copy a journal entry into the feed
  stats <day|week|year>                 period aggregates and progress
  view <active|answered|journal|bookmarks>  list a feed view
  next <view> / prev <view>             move the view cursor
  where <view>                          current cursor position
  quit";

pub fn run(seeded: bool, goals_path: Option<&Path>) -> Result<(), CoreError> {
    let config = super::load_goals(goals_path)?;
    let mut session = if seeded {
        SessionContext::seeded(&config)
    } else {
        SessionContext::new(&config)
    };

    eprintln!("prayerfeed session started (type 'help' for commands)");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !dispatch(&mut session, &line)? {
            break;
        }
        if let Some(notice) = session.pop_notice() {
            eprintln!("notice: {notice}");
        }
    }
    Ok(())
}

/// Execute one command line. Returns false when the session should end.
fn dispatch(session: &mut SessionContext, line: &str) -> Result<bool, CoreError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&verb) = tokens.first() else {
        return Ok(true);
    };

    let outcome = match verb {
        "help" => {
            println!("{HELP}");
            Ok(None)
        }
        "quit" | "exit" => return Ok(false),
        "share" => cmd_share(session, &tokens[1..]),
        "journal" => cmd_journal(session, &tokens[1..]),
        "start" => cmd_timer(session, &tokens[1..], true),
        "stop" => cmd_timer(session, &tokens[1..], false),
        "elapsed" => {
            match session.query_elapsed() {
                Some(secs) => println!("{}", serde_json::json!({ "elapsed_secs": secs })),
                None => println!("{}", serde_json::json!({ "elapsed_secs": null })),
            }
            Ok(None)
        }
        "answered" => cmd_answered(session, &tokens[1..]),
        "bookmark" => cmd_bookmark(session, &tokens[1..]),
        "update" => cmd_update(session, &tokens[1..]),
        "share-journal" => cmd_share_journal(session, &tokens[1..]),
        "stats" => cmd_stats(session, &tokens[1..]),
        "view" => cmd_view(session, &tokens[1..]),
        "next" => cmd_move(session, &tokens[1..], 1),
        "prev" => cmd_move(session, &tokens[1..], -1),
        "where" => cmd_where(session, &tokens[1..]),
        other => Err(format!("unknown command: {other} (try 'help')")),
    };

    match outcome {
        Ok(Some(json)) => println!("{}", serde_json::to_string_pretty(&json)?),
        Ok(None) => {}
        Err(message) => eprintln!("error: {message}"),
    }
    Ok(true)
}

type CommandResult = Result<Option<serde_json::Value>, String>;

fn event_json(event: prayerfeed_core::Event) -> CommandResult {
    Ok(Some(
        serde_json::to_value(&event).map_err(|e| e.to_string())?,
    ))
}

fn parse_id(token: &str) -> Result<EntryId, String> {
    token
        .parse::<u64>()
        .map(EntryId)
        .map_err(|_| format!("invalid id: {token}"))
}

fn cmd_share(session: &mut SessionContext, args: &[&str]) -> CommandResult {
    let (&category, rest) = args
        .split_first()
        .ok_or("usage: share <category> [--anon] <text...>")?;
    let category: Category = category.parse()?;
    let (anon, text_tokens) = match rest.split_first() {
        Some((&"--anon", tail)) => (true, tail),
        _ => (false, rest),
    };
    if text_tokens.is_empty() {
        return Err("share: missing text".into());
    }
    event_json(session.add_shared_entry(&text_tokens.join(" "), category, anon))
}

fn cmd_journal(session: &mut SessionContext, args: &[&str]) -> CommandResult {
    let (&category, text_tokens) = args
        .split_first()
        .ok_or("usage: journal <category> <text...>")?;
    let category: Category = category.parse()?;
    if text_tokens.is_empty() {
        return Err("journal: missing text".into());
    }
    event_json(session.add_journal_entry(&text_tokens.join(" "), category))
}

fn cmd_timer(session: &mut SessionContext, args: &[&str], starting: bool) -> CommandResult {
    let [kind, id] = args else {
        return Err("usage: start|stop <shared|journal> <id>".into());
    };
    let kind: TargetKind = kind.parse()?;
    let id = parse_id(id)?;
    if starting {
        event_json(session.start_timer(id, kind))
    } else {
        match session.stop_timer(id, kind) {
            Some(event) => event_json(event),
            None => Ok(None), // Rejection reason arrives as a notice.
        }
    }
}

fn cmd_answered(session: &mut SessionContext, args: &[&str]) -> CommandResult {
    let (&id, note_tokens) = args.split_first().ok_or("usage: answered <id> [note...]")?;
    let id = parse_id(id)?;
    let note = if note_tokens.is_empty() {
        None
    } else {
        Some(note_tokens.join(" "))
    };
    match session.mark_answered(id, note) {
        Some(event) => event_json(event),
        None => Ok(None),
    }
}

fn cmd_bookmark(session: &mut SessionContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err("usage: bookmark <id>".into());
    };
    match session.toggle_bookmark(parse_id(id)?) {
        Some(event) => event_json(event),
        None => Ok(None),
    }
}

fn cmd_update(session: &mut SessionContext, args: &[&str]) -> CommandResult {
    let (&id, text_tokens) = args.split_first().ok_or("usage: update <id> <text...>")?;
    if text_tokens.is_empty() {
        return Err("update: missing text".into());
    }
    match session.post_update(parse_id(id)?, &text_tokens.join(" ")) {
        Some(event) => event_json(event),
        None => Ok(None),
    }
}

fn cmd_share_journal(session: &mut SessionContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err("usage: share-journal <journal-id>".into());
    };
    match session.share_journal_to_feed(parse_id(id)?) {
        Some(event) => event_json(event),
        None => Ok(None),
    }
}

fn cmd_stats(session: &mut SessionContext, args: &[&str]) -> CommandResult {
    let [period] = args else {
        return Err("usage: stats <day|week|year>".into());
    };
    let period: Period = period.parse()?;
    let stats = session.select_period(period);
    Ok(Some(serde_json::json!({
        "stats": stats,
        "progress": stats.progress(),
    })))
}

fn parse_feed(args: &[&str]) -> Result<FeedKind, String> {
    let [kind] = args else {
        return Err("expected a view: active, answered, journal or bookmarks".into());
    };
    kind.parse()
}

/// A feed row with its relative age label, as the feed displays it.
fn item_json(item: &FeedItem, now: u64) -> Result<serde_json::Value, String> {
    let mut value = serde_json::to_value(item).map_err(|e| e.to_string())?;
    value["when"] = relative_label(item.created_ms, now).into();
    Ok(value)
}

fn cmd_view(session: &mut SessionContext, args: &[&str]) -> CommandResult {
    let kind = parse_feed(args)?;
    let now = now_ms();
    let items = session
        .feed_view(kind)
        .iter()
        .map(|item| item_json(item, now))
        .collect::<Result<Vec<_>, _>>()?;
    let cursor = session.cursor_position(kind);
    Ok(Some(serde_json::json!({
        "cursor": cursor,
        "items": items,
    })))
}

fn cmd_move(session: &mut SessionContext, args: &[&str], step: i64) -> CommandResult {
    let kind = parse_feed(args)?;
    let cursor = session.cursor_advance(kind, step);
    let item = session
        .feed_view(kind)
        .get(cursor.index)
        .map(|item| item_json(item, now_ms()))
        .transpose()?;
    Ok(Some(serde_json::json!({
        "cursor": cursor,
        "item": item,
    })))
}

fn cmd_where(session: &mut SessionContext, args: &[&str]) -> CommandResult {
    let kind = parse_feed(args)?;
    let cursor = session.cursor_position(kind);
    Ok(Some(serde_json::json!({ "cursor": cursor })))
}
