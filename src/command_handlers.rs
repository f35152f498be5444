//! Command handlers module
//!
//! Async handlers behind the administration console: CRUD for events,
//! categories and event types, plus rule document upload. Form input is
//! trimmed and checked for required fields before it reaches the store.

use crate::calendar::{parse_event_date, parse_event_time};
use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::{
    Category, CategoryInput, Document, EventInput, EventType, EventTypeInput, EventWithJoins,
};
use crate::storage::FileStorage;
use crate::utils::{normalize_text, optional_text};
use log::{info, warn};
use serde::Serialize;

pub const ADMIN_PAGE_SIZE: usize = 10;

/// One page of an admin table.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice `items` into 1-based pages. Page 0 is treated as page 1; pages past
/// the end come back empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
        total_items: items.len(),
    }
}

pub fn validate_event_input(input: &EventInput) -> AppResult<EventInput> {
    let title = normalize_text(&input.title);
    if title.is_empty() {
        return Err(AppError::invalid_input("Event title is required"));
    }

    let date = normalize_text(&input.date);
    parse_event_date(&date)
        .map_err(|e| AppError::invalid_input(format!("Invalid event date '{}': {}", date, e)))?;

    let time = optional_text(input.time.as_deref());
    if let Some(time) = &time {
        parse_event_time(time)
            .map_err(|e| AppError::invalid_input(format!("Invalid event time '{}': {}", time, e)))?;
    }

    let category_id = normalize_text(&input.category_id);
    if category_id.is_empty() {
        return Err(AppError::invalid_input("Event category is required"));
    }

    Ok(EventInput {
        title,
        date,
        time,
        category_id,
        event_type_id: optional_text(input.event_type_id.as_deref()),
        legacy_type: optional_text(input.legacy_type.as_deref()),
        location: optional_text(input.location.as_deref()),
        location_url: optional_text(input.location_url.as_deref()),
        description: optional_text(input.description.as_deref()),
        image_url: optional_text(input.image_url.as_deref()),
    })
}

fn validate_category_input(input: &CategoryInput, default_color: &str) -> AppResult<CategoryInput> {
    let name = normalize_text(&input.name);
    if name.is_empty() {
        return Err(AppError::invalid_input("Category name is required"));
    }
    let color = optional_text(Some(&input.color)).unwrap_or_else(|| default_color.to_string());

    Ok(CategoryInput {
        name,
        color,
        contact_name: optional_text(input.contact_name.as_deref()),
        contact_phone: optional_text(input.contact_phone.as_deref()),
    })
}

fn validate_event_type_input(input: &EventTypeInput, default_color: &str) -> AppResult<EventTypeInput> {
    let name = normalize_text(&input.name);
    if name.is_empty() {
        return Err(AppError::invalid_input("Event type name is required"));
    }
    let color = optional_text(Some(&input.color)).unwrap_or_else(|| default_color.to_string());
    Ok(EventTypeInput { name, color })
}

fn found(updated: bool, what: &str, id: &str) -> AppResult<()> {
    if updated {
        Ok(())
    } else {
        Err(AppError::not_found(format!("{} {}", what, id)))
    }
}

/// Administration handlers over the store and file storage.
pub struct AdminHandlers<S> {
    pub db: Database,
    pub storage: S,
}

impl<S: FileStorage> AdminHandlers<S> {
    pub fn new(db: Database, storage: S) -> Self {
        Self { db, storage }
    }

    // --- Events ---

    pub async fn list_events_page(&self, page: usize) -> AppResult<Page<EventWithJoins>> {
        let events = self.db.get_events().await?;
        Ok(paginate(&events, page, ADMIN_PAGE_SIZE))
    }

    pub async fn create_event(&self, input: &EventInput) -> AppResult<String> {
        let input = validate_event_input(input)?;
        info!("Creating event: {}", input.title);
        let id = self.db.create_event(&input).await?;
        info!("Created event {}", id);
        Ok(id)
    }

    pub async fn update_event(&self, event_id: &str, input: &EventInput) -> AppResult<()> {
        let input = validate_event_input(input)?;
        info!("Updating event {}", event_id);
        found(self.db.update_event(event_id, &input).await?, "Event", event_id)
    }

    pub async fn delete_event(&self, event_id: &str) -> AppResult<()> {
        info!("Deleting event {}", event_id);
        found(self.db.delete_event(event_id).await?, "Event", event_id)
    }

    // --- Categories ---

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.db.get_categories().await?)
    }

    pub async fn create_category(&self, input: &CategoryInput) -> AppResult<String> {
        let settings = self.db.get_settings().await?;
        let input = validate_category_input(input, &settings.default_category_color)?;
        info!("Creating category: {}", input.name);
        Ok(self.db.create_category(&input).await?)
    }

    pub async fn update_category(&self, category_id: &str, input: &CategoryInput) -> AppResult<()> {
        let settings = self.db.get_settings().await?;
        let input = validate_category_input(input, &settings.default_category_color)?;
        info!("Updating category {}", category_id);
        found(self.db.update_category(category_id, &input).await?, "Category", category_id)
    }

    /// Also removes every event of the category.
    pub async fn delete_category(&self, category_id: &str) -> AppResult<()> {
        info!("Deleting category {} and its events", category_id);
        found(self.db.delete_category(category_id).await?, "Category", category_id)
    }

    // --- Event types ---

    pub async fn list_event_types(&self) -> AppResult<Vec<EventType>> {
        Ok(self.db.get_event_types().await?)
    }

    pub async fn create_event_type(&self, input: &EventTypeInput) -> AppResult<String> {
        let settings = self.db.get_settings().await?;
        let input = validate_event_type_input(input, &settings.default_type_color)?;
        info!("Creating event type: {}", input.name);
        Ok(self.db.create_event_type(&input).await?)
    }

    pub async fn update_event_type(&self, type_id: &str, input: &EventTypeInput) -> AppResult<()> {
        let settings = self.db.get_settings().await?;
        let input = validate_event_type_input(input, &settings.default_type_color)?;
        info!("Updating event type {}", type_id);
        found(self.db.update_event_type(type_id, &input).await?, "Event type", type_id)
    }

    pub async fn delete_event_type(&self, type_id: &str) -> AppResult<()> {
        info!("Deleting event type {}", type_id);
        found(self.db.delete_event_type(type_id).await?, "Event type", type_id)
    }

    // --- Rule documents ---

    pub async fn list_documents(&self) -> AppResult<Vec<Document>> {
        Ok(self.db.get_documents().await?)
    }

    /// Store the file, then record it under its public URL.
    pub async fn upload_document(&self, title: &str, file_name: &str, bytes: &[u8]) -> AppResult<Document> {
        let title = normalize_text(title);
        if title.is_empty() {
            return Err(AppError::invalid_input("Document title is required"));
        }

        let url = self.storage.upload(file_name, bytes).await?;
        match self.db.add_document(&title, &url).await {
            Ok(document) => {
                info!("Uploaded document '{}' to {}", document.title, document.url);
                Ok(document)
            }
            Err(e) => {
                // Don't leave an orphaned file behind.
                if let Err(cleanup) = self.storage.remove(&url).await {
                    warn!("Failed to remove {} after insert error: {}", url, cleanup);
                }
                Err(e.into())
            }
        }
    }

    /// Remove the stored file, then the record.
    pub async fn delete_document(&self, document_id: &str) -> AppResult<()> {
        let document = self
            .db
            .get_document(document_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {}", document_id)))?;

        if let Err(e) = self.storage.remove(&document.url).await {
            warn!("Failed to remove file for document {}: {}", document_id, e);
        }

        info!("Deleting document {}", document_id);
        found(self.db.delete_document(document_id).await?, "Document", document_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, date: &str, time: Option<&str>) -> EventInput {
        EventInput {
            title: title.to_string(),
            date: date.to_string(),
            time: time.map(str::to_string),
            category_id: "c1".to_string(),
            location: Some("   ".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=23).collect();

        let first = paginate(&items, 1, 10);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, 10);
        assert_eq!(last.items, vec![21, 22, 23]);

        assert!(paginate(&items, 4, 10).items.is_empty());
        assert_eq!(paginate(&items, 0, 10).page, 1);

        let empty: Vec<u32> = Vec::new();
        assert_eq!(paginate(&empty, 1, 10).total_pages, 0);
    }

    #[test]
    fn test_validate_event_input_normalizes() {
        let normalized = validate_event_input(&input("  Copa Apertura ", "2026-03-05", Some("09:30"))).unwrap();
        assert_eq!(normalized.title, "Copa Apertura");
        assert_eq!(normalized.time.as_deref(), Some("09:30"));
        assert_eq!(normalized.location, None);
    }

    #[test]
    fn test_validate_event_input_rejects() {
        assert!(validate_event_input(&input("  ", "2026-03-05", None)).is_err());
        assert!(validate_event_input(&input("Copa", "05/03/2026", None)).is_err());
        assert!(validate_event_input(&input("Copa", "2026-03-05", Some("9h"))).is_err());

        let mut no_category = input("Copa", "2026-03-05", None);
        no_category.category_id = " ".to_string();
        assert!(validate_event_input(&no_category).is_err());
    }

    #[test]
    fn test_validate_category_fills_color() {
        let category = validate_category_input(
            &CategoryInput {
                name: " Enduro ".to_string(),
                color: "".to_string(),
                contact_name: Some("".to_string()),
                contact_phone: Some(" 555-0101 ".to_string()),
            },
            "#DC2626",
        )
        .unwrap();
        assert_eq!(category.name, "Enduro");
        assert_eq!(category.color, "#DC2626");
        assert_eq!(category.contact_name, None);
        assert_eq!(category.contact_phone.as_deref(), Some("555-0101"));
    }
}
