// file: src/models/document.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An uploaded rule document, reachable through its public URL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Last path segment of the public URL, i.e. the stored file name.
    pub fn file_name(&self) -> Option<&str> {
        self.url.rsplit('/').next().filter(|name| !name.is_empty())
    }
}
