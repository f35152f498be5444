//! The read side of the calendar store as the engine sees it.

use crate::database::Database;
use crate::error::AppResult;
use crate::models::{Category, EventWithJoins};

/// Fetch already-joined events and the category list.
///
/// Implementations make no ordering promise; the calendar views sort for
/// themselves.
#[allow(async_fn_in_trait)]
pub trait CalendarStore {
    async fn fetch_events(&self) -> AppResult<Vec<EventWithJoins>>;
    async fn fetch_categories(&self) -> AppResult<Vec<Category>>;
}

impl CalendarStore for Database {
    async fn fetch_events(&self) -> AppResult<Vec<EventWithJoins>> {
        Ok(self.get_events().await?)
    }

    async fn fetch_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.get_categories().await?)
    }
}

/// Fixed in-memory snapshot, e.g. decoded from a JSON export.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    pub events: Vec<EventWithJoins>,
    pub categories: Vec<Category>,
}

impl SnapshotStore {
    pub fn new(events: Vec<EventWithJoins>, categories: Vec<Category>) -> Self {
        Self { events, categories }
    }

    /// Build from JSON arrays shaped like the store's join output.
    pub fn from_json(events_json: &str, categories_json: &str) -> AppResult<Self> {
        Ok(Self {
            events: serde_json::from_str(events_json)?,
            categories: serde_json::from_str(categories_json)?,
        })
    }
}

impl CalendarStore for SnapshotStore {
    async fn fetch_events(&self) -> AppResult<Vec<EventWithJoins>> {
        Ok(self.events.clone())
    }

    async fn fetch_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: &str = r##"[
        {
            "id": "e1", "title": "Copa Apertura", "date": "2026-03-05", "time": "10:00",
            "category_id": "c1", "event_type_id": null, "legacy_type": "Fecha",
            "location": null, "location_url": null, "description": null, "image_url": null,
            "category": {"id": "c1", "name": "Enduro", "color": "#DC2626", "contact_name": null, "contact_phone": null},
            "event_type": null
        }
    ]"##;

    const CATEGORIES: &str = r##"[{"id": "c1", "name": "Enduro", "color": "#DC2626", "contact_name": null, "contact_phone": null}]"##;

    #[test]
    fn test_snapshot_from_json() {
        let store = SnapshotStore::from_json(EVENTS, CATEGORIES).unwrap();
        let events = tokio_test::block_on(store.fetch_events()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].display_type(), "Fecha");
        assert_eq!(events[0].category.as_ref().unwrap().name, "Enduro");
    }

    #[test]
    fn test_snapshot_rejects_bad_json() {
        assert!(SnapshotStore::from_json("{", "[]").is_err());
    }
}
