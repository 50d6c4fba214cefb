use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use daysprout_core::store::Store;

use super::resolve_event;

pub fn run(store: &Store, needle: &str, yes: bool) -> Result<()> {
    let event = resolve_event(store, needle)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete '{}'?", event.title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Aborted".dimmed());
            return Ok(());
        }
    }

    store.delete_event(&event.id)?;
    println!("{}", format!("  Deleted: {}", event.title).red());

    Ok(())
}
