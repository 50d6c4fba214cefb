//! Countdown event and category types.
//!
//! These are the records the store persists and every screen of the app
//! reads. The engine functions in `countdown` and `ordering` only ever
//! look at `target_date`, `repeat_rule` and `countdown_mode`; everything
//! else is carried along for display.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A countdown event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique id, assigned at creation, immutable.
    pub id: String,
    pub title: String,
    /// The anchor the countdown measures against (local wall-clock).
    /// For recurring events this is the *original* anchor; the next
    /// occurrence is derived on read, never written back.
    pub target_date: NaiveDateTime,
    pub category_id: String,
    /// At most one event in the collection is pinned at any time.
    /// Enforced by [`crate::store::set_pinned`], not by the engine.
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub repeat_rule: RepeatRule,
    #[serde(default)]
    pub countdown_mode: CountdownMode,

    // Reminder settings
    #[serde(default)]
    pub remind: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_at: Option<NaiveDateTime>,

    // Display customization (opaque to the engine)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_contrast: Option<f32>,

    pub created_at: DateTime<Utc>,
}

/// How a recurring event advances to its next occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatRule {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Unknown wire values degrade to `none` rather than failing the load.
    #[default]
    #[serde(other)]
    None,
}

impl RepeatRule {
    pub fn label(&self) -> &'static str {
        match self {
            RepeatRule::None => "never",
            RepeatRule::Daily => "daily",
            RepeatRule::Weekly => "weekly",
            RepeatRule::Monthly => "monthly",
            RepeatRule::Yearly => "yearly",
        }
    }
}

/// Display polarity of the countdown. Does not change the underlying
/// day-distance computation, only which sign reads as "left" vs "passed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownMode {
    /// Counting down towards the target ("3 days left").
    #[default]
    Forward,
    /// Counting up since the target ("3 days passed").
    Backward,
}

/// An event category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon_key: String,
    /// Glyph shown next to the name.
    pub icon: String,
}

/// Category that events fall back to when theirs is deleted.
pub const DEFAULT_CATEGORY_ID: &str = "1";

/// Categories seeded into a fresh store.
pub fn default_categories() -> Vec<Category> {
    let seed = [
        ("1", "Life", "life", "🌞"),
        ("2", "Work", "work", "💼"),
        ("3", "Love", "love", "❤️"),
        ("4", "Celebration", "celebration", "🎉"),
        ("5", "Birthday", "birthday", "🎂"),
        ("6", "Graduation", "graduation", "🎓"),
        ("7", "Travel", "travel", "🧳"),
        ("8", "Home", "home", "🏡"),
        ("9", "Fitness", "fitness", "🏋️"),
        ("10", "Study", "study", "📚"),
    ];

    seed.iter()
        .map(|(id, name, icon_key, icon)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            icon_key: (*icon_key).to_string(),
            icon: (*icon).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_repeat_rule_degrades_to_none() {
        let rule: RepeatRule = serde_json::from_str("\"fortnightly\"").unwrap();
        assert_eq!(rule, RepeatRule::None);
    }

    #[test]
    fn repeat_rule_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&RepeatRule::Monthly).unwrap(), "\"monthly\"");
        let rule: RepeatRule = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(rule, RepeatRule::Weekly);
    }

    #[test]
    fn default_categories_contains_fallback() {
        let categories = default_categories();
        assert!(categories.iter().any(|c| c.id == DEFAULT_CATEGORY_ID));
    }
}
