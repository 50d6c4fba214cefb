use anyhow::Result;
use chrono::Local;
use daysprout_core::ordering::search_events;
use daysprout_core::store::Store;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &Store, query: &str) -> Result<()> {
    let today = Local::now().date_naive();

    // Search ranks by match quality, not by date, so it runs over the
    // displayed (recurrence-projected) events but skips the list sort.
    let events = store.display_events(today)?;
    let results = search_events(&events, query);

    if results.is_empty() {
        println!("{}", format!("No events matching '{}'", query).dimmed());
        return Ok(());
    }

    for event in &results {
        println!("{}", event.render(today));
    }

    Ok(())
}
