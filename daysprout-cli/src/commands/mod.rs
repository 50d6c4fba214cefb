pub mod add;
pub mod category;
pub mod delete;
pub mod edit;
pub mod list;
pub mod pin;
pub mod search;
pub mod show;

use anyhow::Result;
use chrono::NaiveDateTime;
use daysprout_core::event::{Category, Event, RepeatRule};
use daysprout_core::store::Store;

/// Resolve an event by id, unique id prefix, or exact title
/// (case-insensitive).
pub fn resolve_event(store: &Store, needle: &str) -> Result<Event> {
    let events = store.events()?;

    if let Some(event) = events.iter().find(|e| e.id == needle) {
        return Ok(event.clone());
    }

    let prefix_matches: Vec<&Event> = events.iter().filter(|e| e.id.starts_with(needle)).collect();
    match prefix_matches.as_slice() {
        [single] => return Ok((*single).clone()),
        [] => {}
        _ => anyhow::bail!("Id prefix '{}' is ambiguous", needle),
    }

    let lower = needle.to_lowercase();
    let title_matches: Vec<&Event> = events
        .iter()
        .filter(|e| e.title.to_lowercase() == lower)
        .collect();
    match title_matches.as_slice() {
        [single] => Ok((*single).clone()),
        [] => anyhow::bail!("Event '{}' not found", needle),
        _ => anyhow::bail!("Several events share the title '{}'; use an id", needle),
    }
}

/// Resolve a category by id or name (case-insensitive).
pub fn resolve_category(store: &Store, needle: &str) -> Result<Category> {
    let categories = store.categories()?;

    if let Some(category) = categories.iter().find(|c| c.id == needle) {
        return Ok(category.clone());
    }

    let lower = needle.to_lowercase();
    categories
        .into_iter()
        .find(|c| c.name.to_lowercase() == lower)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Category '{}' not found. See available ones with: daysprout category list",
                needle
            )
        })
}

/// Parse a date/time input into a local wall-clock datetime.
/// Accepts ISO dates as well as natural language ("next friday 6pm").
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    if let Ok(date) = chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        // Date-only input anchors to start of day.
        return date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid date \"{input}\""));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }

    fuzzydate::parse(input).map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{input}\""))
}

pub fn parse_repeat(input: &str) -> Result<RepeatRule> {
    match input.to_lowercase().as_str() {
        "none" | "never" => Ok(RepeatRule::None),
        "daily" => Ok(RepeatRule::Daily),
        "weekly" => Ok(RepeatRule::Weekly),
        "monthly" => Ok(RepeatRule::Monthly),
        "yearly" => Ok(RepeatRule::Yearly),
        other => anyhow::bail!(
            "Unknown repeat rule '{}'. Expected none, daily, weekly, monthly or yearly",
            other
        ),
    }
}
