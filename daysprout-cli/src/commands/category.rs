use anyhow::Result;
use chrono::Local;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use daysprout_core::store::Store;

use super::resolve_category;
use crate::render::{Render, pluralize};

pub fn run_list(store: &Store) -> Result<()> {
    let today = Local::now().date_naive();
    let categories = store.categories()?;

    for category in &categories {
        let count = store.events_by_category(&category.id)?.len();
        let events = pluralize(count as i64, "event");
        println!("{}  {}", category.render(today), events.dimmed());
    }

    Ok(())
}

pub fn run_add(store: &Store, name: &str, icon: &str) -> Result<()> {
    let icon_key = name.to_lowercase().replace(' ', "-");
    let category = store.add_category(name, &icon_key, icon)?;

    println!("{}", format!("  Created category: {} {}", category.icon, category.name).green());
    Ok(())
}

pub fn run_delete(store: &Store, needle: &str, yes: bool) -> Result<()> {
    let category = resolve_category(store, needle)?;
    let orphaned = store.events_by_category(&category.id)?.len();

    if !yes {
        let prompt = if orphaned > 0 {
            format!(
                "  Delete '{}'? {} will move to the default category",
                category.name,
                pluralize(orphaned as i64, "event")
            )
        } else {
            format!("  Delete '{}'?", category.name)
        };
        let confirmed = Confirm::new().with_prompt(prompt).default(false).interact()?;
        if !confirmed {
            println!("{}", "  Aborted".dimmed());
            return Ok(());
        }
    }

    store.delete_category(&category.id)?;
    println!("{}", format!("  Deleted category: {}", category.name).red());

    Ok(())
}
