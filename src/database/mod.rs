// file: src/database/mod.rs
// SQLite implementation of the calendar store.

use anyhow::{Context, Result};
use log::info;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePool, Sqlite};
use std::path::Path;

use crate::models::{
    Category, CategoryInput, Document, EventInput, EventType, EventTypeInput, EventWithJoins, Settings,
};

pub mod categories;
pub mod documents;
pub mod event_types;
pub mod events;
pub mod settings;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database at `db_url` and apply the schema.
    pub async fn new(db_url: &str) -> Result<Self> {
        let db_exists = Sqlite::database_exists(db_url)
            .await
            .context("Failed to check if database exists")?;
        if !db_exists {
            info!("Creating database");
            Sqlite::create_database(db_url)
                .await
                .context("Failed to create database")?;
        }

        let pool = SqlitePool::connect(db_url)
            .await
            .context("Failed to connect to database")?;

        run_schema(&pool).await.context("Failed to run database schema")?;

        info!("Database initialized successfully");

        Ok(Database { pool })
    }

    /// Open the database file at `path`, creating its directory first.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        Self::new(&format!("sqlite:{}?mode=rwc", path.display())).await
    }

    // --- Event Delegates ---

    pub async fn get_events(&self) -> Result<Vec<EventWithJoins>> {
        events::get_all_joined(&self.pool).await
    }

    pub async fn get_event(&self, event_id: &str) -> Result<Option<EventWithJoins>> {
        events::get_joined(&self.pool, event_id).await
    }

    pub async fn count_events(&self) -> Result<i64> {
        events::count(&self.pool).await
    }

    pub async fn create_event(&self, input: &EventInput) -> Result<String> {
        events::insert(&self.pool, input).await
    }

    pub async fn update_event(&self, event_id: &str, input: &EventInput) -> Result<bool> {
        events::update(&self.pool, event_id, input).await
    }

    pub async fn delete_event(&self, event_id: &str) -> Result<bool> {
        events::delete(&self.pool, event_id).await
    }

    // --- Category Delegates ---

    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        categories::get_all(&self.pool).await
    }

    pub async fn create_category(&self, input: &CategoryInput) -> Result<String> {
        categories::insert(&self.pool, input).await
    }

    pub async fn update_category(&self, category_id: &str, input: &CategoryInput) -> Result<bool> {
        categories::update(&self.pool, category_id, input).await
    }

    pub async fn delete_category(&self, category_id: &str) -> Result<bool> {
        categories::delete(&self.pool, category_id).await
    }

    // --- Event Type Delegates ---

    pub async fn get_event_types(&self) -> Result<Vec<EventType>> {
        event_types::get_all(&self.pool).await
    }

    pub async fn create_event_type(&self, input: &EventTypeInput) -> Result<String> {
        event_types::insert(&self.pool, input).await
    }

    pub async fn update_event_type(&self, type_id: &str, input: &EventTypeInput) -> Result<bool> {
        event_types::update(&self.pool, type_id, input).await
    }

    pub async fn delete_event_type(&self, type_id: &str) -> Result<bool> {
        event_types::delete(&self.pool, type_id).await
    }

    // --- Document Delegates ---

    pub async fn get_documents(&self) -> Result<Vec<Document>> {
        documents::get_all(&self.pool).await
    }

    pub async fn get_document(&self, document_id: &str) -> Result<Option<Document>> {
        documents::get(&self.pool, document_id).await
    }

    pub async fn add_document(&self, title: &str, url: &str) -> Result<Document> {
        documents::insert(&self.pool, title, url).await
    }

    pub async fn delete_document(&self, document_id: &str) -> Result<bool> {
        documents::delete(&self.pool, document_id).await
    }

    // --- Settings Delegates ---

    pub async fn get_settings(&self) -> Result<Settings> {
        settings::get(&self.pool).await
    }

    pub async fn update_settings(&self, settings: &Settings) -> Result<()> {
        settings::update(&self.pool, settings).await
    }
}

/// Execute `schema.sql` one statement at a time; trigger bodies are kept whole.
pub async fn run_schema(pool: &SqlitePool) -> Result<()> {
    let schema = include_str!("schema.sql");

    let mut current_statement = String::new();
    let mut in_trigger = false;

    for line in schema.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") || trimmed.is_empty() {
            continue;
        }

        if trimmed.to_uppercase().starts_with("CREATE TRIGGER") {
            in_trigger = true;
        }

        current_statement.push_str(line);
        current_statement.push('\n');

        if trimmed.ends_with(';') {
            if in_trigger {
                if trimmed.to_uppercase() == "END;" {
                    in_trigger = false;
                    sqlx::query(&current_statement).execute(pool).await?;
                    current_statement.clear();
                }
            } else {
                sqlx::query(&current_statement).execute(pool).await?;
                current_statement.clear();
            }
        }
    }
    Ok(())
}
