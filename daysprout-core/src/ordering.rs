//! Event ordering for list screens and title search.
//!
//! Two distinct rankings that must stay distinct: the default listing puts
//! future events first (soonest first, past most-recent first), while
//! search mode ranks purely by match quality and ignores the future/past
//! partition.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::countdown::is_past;
use crate::event::Event;

/// Sort events future-first for the list screens.
///
/// Future (target on or after today's midnight) sorts before past,
/// future ascending by target, past descending. Events sharing a target
/// keep their input order (stable sort, no secondary key). The result
/// depends on `today`, so callers re-sort on every read.
pub fn sort_events(events: &mut [Event], today: NaiveDate) {
    events.sort_by(|a, b| {
        let a_past = is_past(a.target_date, today);
        let b_past = is_past(b.target_date, today);

        match (a_past, b_past) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (false, false) => a.target_date.cmp(&b.target_date),
            (true, true) => b.target_date.cmp(&a.target_date),
        }
    });
}

/// Filter and rank events by a case-insensitive title query.
///
/// Exact full-title matches come first, then earlier match positions.
/// Ties keep input order. An empty (or all-whitespace) query matches
/// nothing; the caller falls back to the sorted listing instead.
pub fn search_events(events: &[Event], query: &str) -> Vec<Event> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(usize, bool, Event)> = events
        .iter()
        .filter_map(|event| {
            let title = event.title.to_lowercase();
            title
                .find(&query)
                .map(|position| (position, title == query, event.clone()))
        })
        .collect();

    matches.sort_by(|a, b| {
        let (a_pos, a_exact) = (a.0, a.1);
        let (b_pos, b_exact) = (b.0, b.1);
        match (a_exact, b_exact) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a_pos.cmp(&b_pos),
        }
    });

    matches.into_iter().map(|(_, _, event)| event).collect()
}
