// file: src/models/category.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A competition discipline, used to color-code and filter events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String, // "#RRGGBB", passed through untouched
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            contact_name: None,
            contact_phone: None,
        }
    }

    pub fn has_contact(&self) -> bool {
        self.contact_name.is_some() || self.contact_phone.is_some()
    }
}

/// Form data for creating or editing a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub color: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
}
