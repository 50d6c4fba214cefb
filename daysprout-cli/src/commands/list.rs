use anyhow::Result;
use chrono::Local;
use daysprout_core::ordering::sort_events;
use daysprout_core::store::Store;
use owo_colors::OwoColorize;

use super::resolve_category;
use crate::render::Render;

pub fn run(store: &Store, category_filter: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();

    let mut events = store.display_events(today)?;

    if let Some(needle) = category_filter {
        let category = resolve_category(store, needle)?;
        events.retain(|e| e.category_id == category.id);
        println!("{} {}", category.icon, category.name.bold());
    }

    if events.is_empty() {
        println!("{}", "No events yet. Create one with: daysprout add".dimmed());
        return Ok(());
    }

    sort_events(&mut events, today);

    // The pinned event leads the list regardless of date.
    if let Some(index) = events.iter().position(|e| e.is_pinned) {
        let pinned = events.remove(index);
        println!("{}", pinned.render(today));
        if !events.is_empty() {
            println!();
        }
    }

    for event in &events {
        println!("{}", event.render(today));
    }

    Ok(())
}
