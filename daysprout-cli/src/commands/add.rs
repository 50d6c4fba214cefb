use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use daysprout_core::event::{CountdownMode, DEFAULT_CATEGORY_ID, Event, RepeatRule};
use daysprout_core::reminder::next_fire_time;
use daysprout_core::store::{EventDraft, Store};
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

use super::{parse_datetime, parse_repeat, resolve_category};
use crate::render::format_date;

#[allow(clippy::too_many_arguments)]
pub fn run(
    store: &Store,
    title: Option<String>,
    date: Option<String>,
    category: Option<String>,
    repeat: Option<String>,
    backward: bool,
    pin: bool,
    remind_at: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Target date ---
    let target_date = if let Some(d) = date {
        parse_datetime(&d)?
    } else {
        prompt_with_retry("  When?", parse_datetime)?
    };

    // --- Category ---
    let category_id = match category {
        Some(needle) => resolve_category(store, &needle)?.id,
        None => DEFAULT_CATEGORY_ID.to_string(),
    };

    // --- Repeat ---
    let repeat_rule = match repeat {
        Some(r) => parse_repeat(&r)?,
        None => RepeatRule::None,
    };

    // --- Reminder ---
    let reminder_at = match remind_at {
        Some(r) => Some(parse_datetime(&r)?),
        None if interactive => {
            if Confirm::new()
                .with_prompt("  Remind you?")
                .default(false)
                .interact()?
            {
                Some(prompt_with_retry("  Remind at", parse_datetime)?)
            } else {
                None
            }
        }
        None => None,
    };

    let countdown_mode = if backward {
        CountdownMode::Backward
    } else {
        CountdownMode::Forward
    };

    let event = store.add_event(EventDraft {
        title,
        target_date,
        category_id,
        is_pinned: pin,
        repeat_rule,
        countdown_mode,
        remind: reminder_at.is_some(),
        reminder_at,
    })?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", event.title).green());
    println!("  {}", format_date(event.target_date).dimmed());

    // The save is already durable; reminder reporting is best-effort
    // and must never fail the command.
    report_reminder(&event);

    Ok(())
}

/// Prompt the user with retry on parse errors.
pub fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<NaiveDateTime>
where
    F: Fn(&str) -> Result<NaiveDateTime>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Tell the user when the reminder will fire, or warn when it never will.
pub fn report_reminder(event: &Event) {
    if !event.remind {
        return;
    }

    let now = Local::now().naive_local();
    match next_fire_time(event, now) {
        Some(fire) => {
            println!(
                "  {}",
                format!("Reminder fires {} {}", format_date(fire), fire.format("%H:%M")).dimmed()
            );
        }
        None => {
            eprintln!(
                "  {}",
                "Warning: the reminder time is in the past and will not fire".yellow()
            );
        }
    }
}
