// file: src/models/event.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::category::Category;
use super::event_type::EventType;
use crate::calendar::common::{parse_event_date, DateIssue};

/// A competition as stored, with foreign keys still unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Time of day, `HH:MM` or `HH:MM:SS`.
    pub time: Option<String>,
    pub category_id: String,
    pub event_type_id: Option<String>,
    /// Free-text type kept from before event types existed.
    pub legacy_type: Option<String>,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            time: None,
            category_id: category_id.into(),
            event_type_id: None,
            legacy_type: None,
            location: None,
            location_url: None,
            description: None,
            image_url: None,
        }
    }
}

/// An event with its category and type already resolved by the store.
///
/// `category` is `None` when the reference dangles; such events count as
/// uncategorized but still take part in every date-based view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWithJoins {
    #[serde(flatten)]
    pub event: Event,
    pub category: Option<Category>,
    pub event_type: Option<EventType>,
}

impl EventWithJoins {
    pub fn new(event: Event, category: Option<Category>, event_type: Option<EventType>) -> Self {
        Self {
            event,
            category,
            event_type,
        }
    }

    pub fn id(&self) -> &str {
        &self.event.id
    }

    pub fn category_id(&self) -> &str {
        &self.event.category_id
    }

    pub fn calendar_date(&self) -> Result<NaiveDate, DateIssue> {
        parse_event_date(&self.event.date).map_err(|reason| DateIssue {
            event_id: self.event.id.clone(),
            raw: self.event.date.clone(),
            reason,
        })
    }

    /// Type reference name, else the legacy type string, else empty.
    pub fn display_type(&self) -> &str {
        match (&self.event_type, &self.event.legacy_type) {
            (Some(event_type), _) => &event_type.name,
            (None, Some(legacy)) => legacy,
            (None, None) => "",
        }
    }

    pub fn display_type_color<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.event_type
            .as_ref()
            .map(|event_type| event_type.color.as_str())
            .unwrap_or(fallback)
    }

    pub fn category_color<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.category
            .as_ref()
            .map(|category| category.color.as_str())
            .unwrap_or(fallback)
    }

    /// `HH:MM` form of the time of day, seconds dropped.
    pub fn short_time(&self) -> Option<&str> {
        self.event
            .time
            .as_deref()
            .map(|time| time.get(..5).unwrap_or(time))
    }
}

/// Form data for creating or editing an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub category_id: String,
    pub event_type_id: Option<String>,
    pub legacy_type: Option<String>,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
