use anyhow::Result;
use daysprout_core::store::Store;
use owo_colors::OwoColorize;

use super::{parse_datetime, parse_repeat, resolve_category, resolve_event};
use crate::commands::add::report_reminder;

pub fn run(
    store: &Store,
    needle: &str,
    title: Option<String>,
    date: Option<String>,
    category: Option<String>,
    repeat: Option<String>,
    remind_at: Option<String>,
) -> Result<()> {
    let mut event = resolve_event(store, needle)?;

    if let Some(t) = title {
        event.title = t;
    }
    if let Some(d) = date {
        event.target_date = parse_datetime(&d)?;
    }
    if let Some(c) = category {
        event.category_id = resolve_category(store, &c)?.id;
    }
    if let Some(r) = repeat {
        event.repeat_rule = parse_repeat(&r)?;
    }
    if let Some(r) = remind_at {
        if r.eq_ignore_ascii_case("off") {
            event.remind = false;
            event.reminder_at = None;
        } else {
            event.reminder_at = Some(parse_datetime(&r)?);
            event.remind = true;
        }
    }

    let updated = store.update_event(event)?;

    println!("{}", format!("  Updated: {}", updated.title).green());
    report_reminder(&updated);

    Ok(())
}
