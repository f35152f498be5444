// file: src/database/event_types.rs
use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::models::{EventType, EventTypeInput};

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<EventType>> {
    let event_types = sqlx::query_as::<_, EventType>("SELECT id, name, color FROM event_types ORDER BY name")
        .fetch_all(pool)
        .await
        .context("Failed to fetch event types")?;

    Ok(event_types)
}

pub async fn insert(pool: &SqlitePool, input: &EventTypeInput) -> Result<String> {
    let id = uuid::Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO event_types (id, name, color) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(&input.name)
        .bind(&input.color)
        .execute(pool)
        .await
        .context("Failed to insert event type")?;

    Ok(id)
}

pub async fn update(pool: &SqlitePool, type_id: &str, input: &EventTypeInput) -> Result<bool> {
    let result = sqlx::query("UPDATE event_types SET name = ?, color = ? WHERE id = ?")
        .bind(&input.name)
        .bind(&input.color)
        .bind(type_id)
        .execute(pool)
        .await
        .context("Failed to update event type")?;

    Ok(result.rows_affected() > 0)
}

/// Events that used the type keep existing with no type (ON DELETE SET NULL).
pub async fn delete(pool: &SqlitePool, type_id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM event_types WHERE id = ?")
        .bind(type_id)
        .execute(pool)
        .await
        .context("Failed to delete event type")?;

    Ok(result.rows_affected() > 0)
}
