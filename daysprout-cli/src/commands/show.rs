use anyhow::Result;
use chrono::Local;
use daysprout_core::countdown::{
    available_unit_modes, days_difference, distance_suffix, format_distance, next_occurrence,
};
use daysprout_core::event::{CountdownMode, RepeatRule};
use daysprout_core::store::Store;
use owo_colors::OwoColorize;

use super::resolve_event;
use crate::render::format_date;

pub fn run(store: &Store, needle: &str) -> Result<()> {
    let today = Local::now().date_naive();

    let mut event = resolve_event(store, needle)?;
    if event.repeat_rule != RepeatRule::None {
        event.target_date = next_occurrence(event.target_date, event.repeat_rule, today);
    }

    let days = days_difference(event.target_date, today);
    let display_days = match event.countdown_mode {
        CountdownMode::Forward => days,
        CountdownMode::Backward => -days,
    };
    let suffix = distance_suffix(event.countdown_mode, display_days);

    let pin = if event.is_pinned { " 📌" } else { "" };
    println!("{}{}", event.title.bold(), pin);
    println!("{}", format_date(event.target_date).dimmed());
    println!();

    // Every unit the tap-to-cycle display would offer for this distance.
    for mode in available_unit_modes(days.abs()) {
        let value = format_distance(days, mode);
        println!("  {} {}  {}", value.bold(), suffix, format!("({})", mode.label()).dimmed());
    }

    println!();
    if let Ok(category) = store.get_category(&event.category_id) {
        println!("Category:  {} {}", category.icon, category.name);
    }
    println!("Repeats:   {}", event.repeat_rule.label());
    match (event.remind, event.reminder_at) {
        (true, Some(at)) => {
            println!("Reminder:  {} {}", format_date(at), at.format("%H:%M"))
        }
        _ => println!("Reminder:  off"),
    }
    println!("{}", format!("Id: {}", event.id).dimmed());

    Ok(())
}
