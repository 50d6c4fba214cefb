//! Terminal rendering for daysprout types.
//!
//! Extension traits that add colored one-line rendering to core types
//! using owo_colors.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use daysprout_core::countdown::{days_difference, distance_suffix};
use daysprout_core::event::{Category, CountdownMode, Event};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self, today: NaiveDate) -> String;
}

impl Render for Event {
    fn render(&self, today: NaiveDate) -> String {
        let pin = if self.is_pinned { "📌 " } else { "" };
        let label = countdown_label(self, today);
        let date = self.target_date.format("%Y-%m-%d").to_string();

        format!("{}{}  {} {}", pin, self.title.bold(), label, date.dimmed())
    }
}

impl Render for Category {
    fn render(&self, _today: NaiveDate) -> String {
        format!("{} {}  {}", self.icon, self.name.bold(), self.id.dimmed())
    }
}

/// "3 days left" / "1 day passed" / "today", colored by direction.
pub fn countdown_label(event: &Event, today: NaiveDate) -> String {
    let days = days_difference(event.target_date, today);
    let display_days = match event.countdown_mode {
        CountdownMode::Forward => days,
        CountdownMode::Backward => -days,
    };
    let suffix = distance_suffix(event.countdown_mode, display_days);

    if days == 0 {
        return "today".green().bold().to_string();
    }

    let label = format!("{} {}", pluralize(days.abs(), "day"), suffix);
    match suffix {
        "left" => label.green().to_string(),
        _ => label.red().to_string(),
    }
}

/// "2025-03-20, Thursday" — the detail screen's date format.
pub fn format_date(date: NaiveDateTime) -> String {
    format!("{}, {}", date.format("%Y-%m-%d"), weekday_name(date.weekday()))
}

fn weekday_name(weekday: chrono::Weekday) -> &'static str {
    match weekday {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}

pub fn pluralize(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use daysprout_core::event::RepeatRule;

    fn event(mode: CountdownMode, y: i32, m: u32, d: u32) -> Event {
        Event {
            id: "e".to_string(),
            title: "Launch".to_string(),
            target_date: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            category_id: "1".to_string(),
            is_pinned: false,
            repeat_rule: RepeatRule::None,
            countdown_mode: mode,
            remind: false,
            reminder_at: None,
            background_image: None,
            counter_text_color: None,
            background_contrast: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn label_direction_follows_countdown_mode() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();

        let future = event(CountdownMode::Forward, 2025, 3, 25);
        assert!(countdown_label(&future, today).contains("5 days left"));

        let past = event(CountdownMode::Forward, 2025, 3, 18);
        assert!(countdown_label(&past, today).contains("2 days passed"));

        // Backward counters read elapsed time as "passed".
        let since = event(CountdownMode::Backward, 2025, 3, 18);
        assert!(countdown_label(&since, today).contains("2 days passed"));
    }

    #[test]
    fn target_today_renders_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let e = event(CountdownMode::Forward, 2025, 3, 20);
        assert!(countdown_label(&e, today).contains("today"));
    }

    #[test]
    fn detail_date_includes_weekday() {
        let dt = NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(format_date(dt), "2025-03-20, Thursday");
    }
}
