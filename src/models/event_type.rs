// file: src/models/event_type.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Secondary classification tag on an event, independent of its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EventType {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl EventType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventTypeInput {
    pub name: String,
    pub color: String,
}
