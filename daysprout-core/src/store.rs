//! Local event and category storage.
//!
//! Persists the two collections as pretty-printed JSON files
//! (`events.json`, `categories.json`) in the configured data directory.
//! Every operation is read-modify-write over a whole collection; nothing
//! is written when an operation fails partway, so the prior file stays
//! intact.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, Utc};

use crate::config::DaySproutConfig;
use crate::countdown::next_occurrence;
use crate::error::{DaySproutError, DaySproutResult};
use crate::event::{
    Category, CountdownMode, DEFAULT_CATEGORY_ID, Event, RepeatRule, default_categories,
};

const EVENTS_FILE: &str = "events.json";
const CATEGORIES_FILE: &str = "categories.json";

/// Fields supplied by the caller when creating an event.
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub target_date: NaiveDateTime,
    pub category_id: String,
    pub is_pinned: bool,
    pub repeat_rule: RepeatRule,
    pub countdown_mode: CountdownMode,
    pub remind: bool,
    pub reminder_at: Option<NaiveDateTime>,
}

/// Handle to the on-disk event and category collections.
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Open the store at the configured data directory.
    pub fn load() -> DaySproutResult<Self> {
        let config = DaySproutConfig::load()?;
        Ok(Store {
            data_dir: config.data_path(),
        })
    }

    /// Open the store at an explicit directory.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Store {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// All events as persisted. Recurring events keep their original anchor.
    pub fn events(&self) -> DaySproutResult<Vec<Event>> {
        self.read_collection(EVENTS_FILE)
    }

    /// All events with recurring anchors projected to their next
    /// occurrence, ready for display. The projection is derived on every
    /// read; the persisted anchor is never moved.
    pub fn display_events(&self, today: NaiveDate) -> DaySproutResult<Vec<Event>> {
        let mut events = self.events()?;
        for event in &mut events {
            if event.repeat_rule != RepeatRule::None {
                event.target_date = next_occurrence(event.target_date, event.repeat_rule, today);
            }
        }
        Ok(events)
    }

    pub fn get_event(&self, id: &str) -> DaySproutResult<Event> {
        self.events()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DaySproutError::EventNotFound(id.to_string()))
    }

    /// Create a new event. Pinning the new event unpins every other.
    pub fn add_event(&self, draft: EventDraft) -> DaySproutResult<Event> {
        if draft.title.trim().is_empty() {
            return Err(DaySproutError::InvalidEvent("title must not be empty".into()));
        }

        let mut events = self.events()?;
        if draft.is_pinned {
            clear_pins(&mut events);
        }

        let event = Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            target_date: draft.target_date,
            category_id: draft.category_id,
            is_pinned: draft.is_pinned,
            repeat_rule: draft.repeat_rule,
            countdown_mode: draft.countdown_mode,
            remind: draft.remind,
            reminder_at: draft.reminder_at,
            background_image: None,
            counter_text_color: None,
            background_contrast: None,
            created_at: Utc::now(),
        };

        events.push(event.clone());
        self.write_collection(EVENTS_FILE, &events)?;
        Ok(event)
    }

    /// Replace an existing event by id. Pinning it unpins every other.
    /// A missing id is an error and writes nothing.
    pub fn update_event(&self, updated: Event) -> DaySproutResult<Event> {
        if updated.title.trim().is_empty() {
            return Err(DaySproutError::InvalidEvent("title must not be empty".into()));
        }

        let mut events = self.events()?;
        let index = events
            .iter()
            .position(|e| e.id == updated.id)
            .ok_or_else(|| DaySproutError::EventNotFound(updated.id.clone()))?;

        if updated.is_pinned {
            clear_pins(&mut events);
        }
        events[index] = updated.clone();

        self.write_collection(EVENTS_FILE, &events)?;
        Ok(updated)
    }

    pub fn delete_event(&self, id: &str) -> DaySproutResult<()> {
        let mut events = self.events()?;
        let before = events.len();
        events.retain(|e| e.id != id);

        if events.len() == before {
            return Err(DaySproutError::EventNotFound(id.to_string()));
        }

        self.write_collection(EVENTS_FILE, &events)
    }

    /// Pin one event, unpinning all others in the same write.
    pub fn pin_event(&self, id: &str) -> DaySproutResult<Event> {
        let mut events = self.events()?;
        set_pinned(&mut events, id)?;
        self.write_collection(EVENTS_FILE, &events)?;

        // set_pinned guarantees the id exists.
        events
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DaySproutError::EventNotFound(id.to_string()))
    }

    pub fn unpin_all(&self) -> DaySproutResult<()> {
        let mut events = self.events()?;
        clear_pins(&mut events);
        self.write_collection(EVENTS_FILE, &events)
    }

    pub fn pinned_event(&self) -> DaySproutResult<Option<Event>> {
        Ok(self.events()?.into_iter().find(|e| e.is_pinned))
    }

    pub fn events_by_category(&self, category_id: &str) -> DaySproutResult<Vec<Event>> {
        Ok(self
            .events()?
            .into_iter()
            .filter(|e| e.category_id == category_id)
            .collect())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// All categories. A fresh store is seeded with the defaults.
    pub fn categories(&self) -> DaySproutResult<Vec<Category>> {
        if !self.data_dir.join(CATEGORIES_FILE).exists() {
            let defaults = default_categories();
            self.write_collection(CATEGORIES_FILE, &defaults)?;
            return Ok(defaults);
        }
        self.read_collection(CATEGORIES_FILE)
    }

    pub fn get_category(&self, id: &str) -> DaySproutResult<Category> {
        self.categories()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DaySproutError::CategoryNotFound(id.to_string()))
    }

    pub fn add_category(&self, name: &str, icon_key: &str, icon: &str) -> DaySproutResult<Category> {
        let mut categories = self.categories()?;

        let category = Category {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            icon_key: icon_key.to_string(),
            icon: icon.to_string(),
        };

        categories.push(category.clone());
        self.write_collection(CATEGORIES_FILE, &categories)?;
        Ok(category)
    }

    /// Delete a category and reassign its events to the default category
    /// in the same logical operation. The default category itself cannot
    /// be deleted.
    pub fn delete_category(&self, id: &str) -> DaySproutResult<()> {
        if id == DEFAULT_CATEGORY_ID {
            return Err(DaySproutError::DefaultCategoryProtected);
        }

        let mut categories = self.categories()?;
        let before = categories.len();
        categories.retain(|c| c.id != id);

        if categories.len() == before {
            return Err(DaySproutError::CategoryNotFound(id.to_string()));
        }

        let mut events = self.events()?;
        for event in &mut events {
            if event.category_id == id {
                event.category_id = DEFAULT_CATEGORY_ID.to_string();
            }
        }

        self.write_collection(CATEGORIES_FILE, &categories)?;
        self.write_collection(EVENTS_FILE, &events)
    }

    // =========================================================================
    // Internal: JSON files
    // =========================================================================

    fn read_collection<T: serde::de::DeserializeOwned>(
        &self,
        filename: &str,
    ) -> DaySproutResult<Vec<T>> {
        let path = self.data_dir.join(filename);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| {
            DaySproutError::Serialization(format!("{}: {}", path.display(), e))
        })
    }

    fn write_collection<T: serde::Serialize>(
        &self,
        filename: &str,
        items: &[T],
    ) -> DaySproutResult<()> {
        std::fs::create_dir_all(&self.data_dir)?;

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| DaySproutError::Serialization(e.to_string()))?;

        std::fs::write(self.data_dir.join(filename), content)?;
        Ok(())
    }
}

/// Clear every pin and set the one on `target_id`.
///
/// The single place the at-most-one-pinned invariant is enforced; the
/// add/update/pin paths all route through here or [`clear_pins`].
pub fn set_pinned(events: &mut [Event], target_id: &str) -> DaySproutResult<()> {
    if !events.iter().any(|e| e.id == target_id) {
        return Err(DaySproutError::EventNotFound(target_id.to_string()));
    }

    for event in events.iter_mut() {
        event.is_pinned = event.id == target_id;
    }
    Ok(())
}

fn clear_pins(events: &mut [Event]) {
    for event in events.iter_mut() {
        event.is_pinned = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            target_date: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            category_id: DEFAULT_CATEGORY_ID.to_string(),
            is_pinned: false,
            repeat_rule: RepeatRule::None,
            countdown_mode: CountdownMode::Forward,
            remind: false,
            reminder_at: None,
        }
    }

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path());
        (dir, store)
    }

    #[test]
    fn empty_store_reads_as_empty() {
        let (_dir, store) = temp_store();
        assert!(store.events().unwrap().is_empty());
        assert!(store.pinned_event().unwrap().is_none());
    }

    #[test]
    fn add_and_read_back() {
        let (_dir, store) = temp_store();
        let created = store.add_event(draft("Exam")).unwrap();
        assert!(!created.id.is_empty());

        let events = store.events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], created);
    }

    #[test]
    fn empty_title_is_rejected() {
        let (_dir, store) = temp_store();
        let result = store.add_event(draft("   "));
        assert!(matches!(result, Err(DaySproutError::InvalidEvent(_))));
        assert!(store.events().unwrap().is_empty());
    }

    #[test]
    fn update_replaces_record() {
        let (_dir, store) = temp_store();
        let mut event = store.add_event(draft("Before")).unwrap();
        event.title = "After".to_string();
        store.update_event(event.clone()).unwrap();

        let events = store.events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "After");
    }

    #[test]
    fn failed_update_leaves_prior_record_intact() {
        let (_dir, store) = temp_store();
        let event = store.add_event(draft("Keep me")).unwrap();

        let mut ghost = event.clone();
        ghost.id = "no-such-id".to_string();
        ghost.title = "Ghost".to_string();
        let result = store.update_event(ghost);
        assert!(matches!(result, Err(DaySproutError::EventNotFound(_))));

        assert_eq!(store.events().unwrap(), vec![event]);
    }

    #[test]
    fn delete_removes_only_target() {
        let (_dir, store) = temp_store();
        let a = store.add_event(draft("a")).unwrap();
        let b = store.add_event(draft("b")).unwrap();

        store.delete_event(&a.id).unwrap();
        let events = store.events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, b.id);

        assert!(matches!(
            store.delete_event("missing"),
            Err(DaySproutError::EventNotFound(_))
        ));
    }

    #[test]
    fn at_most_one_pin_across_all_paths() {
        let (_dir, store) = temp_store();
        let a = store.add_event(draft("a")).unwrap();
        store.pin_event(&a.id).unwrap();

        // Adding a pinned event steals the pin.
        let mut pinned_draft = draft("b");
        pinned_draft.is_pinned = true;
        let b = store.add_event(pinned_draft).unwrap();

        let pinned: Vec<_> = store
            .events()
            .unwrap()
            .into_iter()
            .filter(|e| e.is_pinned)
            .collect();
        assert_eq!(pinned.len(), 1);
        assert_eq!(pinned[0].id, b.id);

        // Updating another event to pinned steals it again.
        let mut a2 = store.get_event(&a.id).unwrap();
        a2.is_pinned = true;
        store.update_event(a2).unwrap();
        assert_eq!(store.pinned_event().unwrap().unwrap().id, a.id);

        store.unpin_all().unwrap();
        assert!(store.pinned_event().unwrap().is_none());
    }

    #[test]
    fn pin_unknown_event_changes_nothing() {
        let (_dir, store) = temp_store();
        let a = store.add_event(draft("a")).unwrap();
        store.pin_event(&a.id).unwrap();

        assert!(matches!(
            store.pin_event("missing"),
            Err(DaySproutError::EventNotFound(_))
        ));
        assert_eq!(store.pinned_event().unwrap().unwrap().id, a.id);
    }

    #[test]
    fn categories_seed_defaults_once() {
        let (_dir, store) = temp_store();
        let first = store.categories().unwrap();
        assert!(!first.is_empty());

        let added = store.add_category("Gaming", "game", "🎮").unwrap();
        let second = store.categories().unwrap();
        assert_eq!(second.len(), first.len() + 1);
        assert!(second.iter().any(|c| c.id == added.id));
    }

    #[test]
    fn deleting_category_reassigns_events_to_default() {
        let (_dir, store) = temp_store();
        let category = store.add_category("Trips", "travel", "🧳").unwrap();

        let mut d = draft("Flight");
        d.category_id = category.id.clone();
        let event = store.add_event(d).unwrap();

        store.delete_category(&category.id).unwrap();

        assert!(store.categories().unwrap().iter().all(|c| c.id != category.id));
        assert_eq!(
            store.get_event(&event.id).unwrap().category_id,
            DEFAULT_CATEGORY_ID
        );
    }

    #[test]
    fn default_category_cannot_be_deleted() {
        let (_dir, store) = temp_store();
        store.categories().unwrap();
        assert!(matches!(
            store.delete_category(DEFAULT_CATEGORY_ID),
            Err(DaySproutError::DefaultCategoryProtected)
        ));
    }

    #[test]
    fn display_events_projects_recurring_anchor_without_moving_it() {
        let (_dir, store) = temp_store();
        let mut d = draft("Standup");
        d.target_date = NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        d.repeat_rule = RepeatRule::Weekly;
        let event = store.add_event(d).unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let shown = store.display_events(today).unwrap();
        assert!(shown[0].target_date.date() > today);

        // The persisted anchor stays where it was.
        assert_eq!(store.get_event(&event.id).unwrap().target_date, event.target_date);
    }
}
