use anyhow::Result;
use owo_colors::OwoColorize;

use daysprout_core::store::Store;

use super::resolve_event;

pub fn run(store: &Store, needle: &str) -> Result<()> {
    let event = resolve_event(store, needle)?;
    let pinned = store.pin_event(&event.id)?;

    println!("{}", format!("  📌 Pinned: {}", pinned.title).green());
    Ok(())
}

pub fn run_unpin(store: &Store) -> Result<()> {
    match store.pinned_event()? {
        Some(event) => {
            store.unpin_all()?;
            println!("{}", format!("  Unpinned: {}", event.title).dimmed());
        }
        None => println!("{}", "  Nothing is pinned".dimmed()),
    }
    Ok(())
}
