//! Reminder fire-time projection.
//!
//! Delivery itself lives in the daysprout-notify binary and is
//! best-effort; this module only answers "when does this event's reminder
//! fire next" and "which reminders came due in this window".

use std::path::Path;

use chrono::NaiveDateTime;

use crate::countdown::advance_by_rule;
use crate::error::DaySproutResult;
use crate::event::{Event, RepeatRule};

/// The next moment an event's reminder should fire, strictly after `now`.
///
/// `None` when reminders are off, no reminder time is set, or a one-shot
/// reminder has already passed. Repeating reminders project forward by
/// the event's repeat rule.
pub fn next_fire_time(event: &Event, now: NaiveDateTime) -> Option<NaiveDateTime> {
    if !event.remind {
        return None;
    }
    let base = event.reminder_at?;

    if event.repeat_rule == RepeatRule::None {
        return if base > now { Some(base) } else { None };
    }

    let mut fire = base;
    while fire <= now {
        fire = advance_by_rule(fire, event.repeat_rule)?;
    }
    Some(fire)
}

/// Events whose reminder fires in the window `(since, now]`.
///
/// One-shot reminders are due when their time falls in the window;
/// repeating reminders are due when their first occurrence after `since`
/// has already arrived.
pub fn due_reminders(events: &[Event], since: NaiveDateTime, now: NaiveDateTime) -> Vec<Event> {
    events
        .iter()
        .filter(|event| {
            next_fire_time(event, since).is_some_and(|fire| fire <= now)
        })
        .cloned()
        .collect()
}

const WATERMARK_FILE: &str = ".notify_watermark";

/// Last time the notify service checked for due reminders.
pub fn load_watermark(data_dir: &Path) -> Option<NaiveDateTime> {
    let content = std::fs::read_to_string(data_dir.join(WATERMARK_FILE)).ok()?;
    NaiveDateTime::parse_from_str(content.trim(), "%Y-%m-%dT%H:%M:%S").ok()
}

pub fn save_watermark(data_dir: &Path, checked_at: NaiveDateTime) -> DaySproutResult<()> {
    std::fs::create_dir_all(data_dir)?;
    std::fs::write(
        data_dir.join(WATERMARK_FILE),
        checked_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::CountdownMode;
    use chrono::{NaiveDate, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn reminder_event(rule: RepeatRule, reminder_at: NaiveDateTime) -> Event {
        Event {
            id: "r".to_string(),
            title: "Reminder".to_string(),
            target_date: reminder_at,
            category_id: "1".to_string(),
            is_pinned: false,
            repeat_rule: rule,
            countdown_mode: CountdownMode::Forward,
            remind: true,
            reminder_at: Some(reminder_at),
            background_image: None,
            counter_text_color: None,
            background_contrast: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn one_shot_future_fires_once() {
        let event = reminder_event(RepeatRule::None, at(2025, 3, 21, 9, 0));
        let now = at(2025, 3, 20, 12, 0);
        assert_eq!(next_fire_time(&event, now), Some(at(2025, 3, 21, 9, 0)));
    }

    #[test]
    fn one_shot_past_never_fires() {
        let event = reminder_event(RepeatRule::None, at(2025, 3, 19, 9, 0));
        assert_eq!(next_fire_time(&event, at(2025, 3, 20, 12, 0)), None);
    }

    #[test]
    fn reminders_off_never_fire() {
        let mut event = reminder_event(RepeatRule::Daily, at(2025, 3, 19, 9, 0));
        event.remind = false;
        assert_eq!(next_fire_time(&event, at(2025, 3, 20, 12, 0)), None);

        let mut no_time = reminder_event(RepeatRule::Daily, at(2025, 3, 19, 9, 0));
        no_time.reminder_at = None;
        assert_eq!(next_fire_time(&no_time, at(2025, 3, 20, 12, 0)), None);
    }

    #[test]
    fn daily_reminder_rolls_to_next_morning() {
        let event = reminder_event(RepeatRule::Daily, at(2025, 3, 1, 9, 0));
        let now = at(2025, 3, 20, 12, 0);
        assert_eq!(next_fire_time(&event, now), Some(at(2025, 3, 21, 9, 0)));
    }

    #[test]
    fn weekly_reminder_keeps_time_of_day() {
        let event = reminder_event(RepeatRule::Weekly, at(2025, 1, 6, 18, 30));
        let fire = next_fire_time(&event, at(2025, 3, 20, 12, 0)).unwrap();
        assert_eq!(fire.time(), at(2025, 1, 6, 18, 30).time());
        assert!(fire > at(2025, 3, 20, 12, 0));
    }

    #[test]
    fn due_window_is_exclusive_inclusive() {
        let event = reminder_event(RepeatRule::None, at(2025, 3, 20, 9, 0));
        let events = vec![event];

        // Fire time inside the window: due.
        let due = due_reminders(&events, at(2025, 3, 20, 8, 0), at(2025, 3, 20, 10, 0));
        assert_eq!(due.len(), 1);

        // Fire time exactly at `since`: already handled by a prior check.
        let due = due_reminders(&events, at(2025, 3, 20, 9, 0), at(2025, 3, 20, 10, 0));
        assert!(due.is_empty());

        // Fire time after `now`: not yet.
        let due = due_reminders(&events, at(2025, 3, 20, 7, 0), at(2025, 3, 20, 8, 0));
        assert!(due.is_empty());
    }

    #[test]
    fn watermark_round_trips() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(load_watermark(dir.path()), None);

        let stamp = at(2025, 3, 20, 12, 34);
        save_watermark(dir.path(), stamp).unwrap();
        assert_eq!(load_watermark(dir.path()), Some(stamp));
    }
}
