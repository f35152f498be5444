// file: src/database/events.rs
use anyhow::{Context, Result};
use sqlx::{FromRow, SqlitePool};

use crate::models::{Category, Event, EventInput, EventType, EventWithJoins};
use crate::utils::logging::log_database_operation;
use std::time::Instant;

const EVENT_COLUMNS: &str = r#"
    e.id AS id, e.title AS title, e.date AS date, e.time AS time,
    e.category_id AS category_id, e.event_type_id AS event_type_id,
    e.legacy_type AS legacy_type, e.location AS location,
    e.location_url AS location_url, e.description AS description, e.image_url AS image_url
"#;

/// One row of the events/categories/event_types join.
#[derive(Debug, FromRow)]
struct JoinedEventRow {
    #[sqlx(flatten)]
    event: Event,
    c_id: Option<String>,
    c_name: Option<String>,
    c_color: Option<String>,
    c_contact_name: Option<String>,
    c_contact_phone: Option<String>,
    t_id: Option<String>,
    t_name: Option<String>,
    t_color: Option<String>,
}

impl JoinedEventRow {
    fn into_joined(self) -> EventWithJoins {
        let category = match (self.c_id, self.c_name, self.c_color) {
            (Some(id), Some(name), Some(color)) => Some(Category {
                id,
                name,
                color,
                contact_name: self.c_contact_name,
                contact_phone: self.c_contact_phone,
            }),
            _ => None,
        };
        let event_type = match (self.t_id, self.t_name, self.t_color) {
            (Some(id), Some(name), Some(color)) => Some(EventType { id, name, color }),
            _ => None,
        };

        EventWithJoins::new(self.event, category, event_type)
    }
}

fn joined_query(filter: &str) -> String {
    format!(
        r#"
        SELECT {}
            , c.id AS c_id, c.name AS c_name, c.color AS c_color
            , c.contact_name AS c_contact_name, c.contact_phone AS c_contact_phone
            , t.id AS t_id, t.name AS t_name, t.color AS t_color
        FROM events e
        LEFT JOIN categories c ON c.id = e.category_id
        LEFT JOIN event_types t ON t.id = e.event_type_id
        {}
        ORDER BY e.date ASC, e.created_at ASC, e.rowid ASC
        "#,
        EVENT_COLUMNS, filter
    )
}

pub async fn get_all_joined(pool: &SqlitePool) -> Result<Vec<EventWithJoins>> {
    let start = Instant::now();
    let rows = sqlx::query_as::<_, JoinedEventRow>(&joined_query(""))
        .fetch_all(pool)
        .await
        .context("Failed to fetch events")?;
    log_database_operation("SELECT joined", "events", start.elapsed().as_millis() as u64);

    Ok(rows.into_iter().map(JoinedEventRow::into_joined).collect())
}

pub async fn get_joined(pool: &SqlitePool, event_id: &str) -> Result<Option<EventWithJoins>> {
    let row = sqlx::query_as::<_, JoinedEventRow>(&joined_query("WHERE e.id = ?"))
        .bind(event_id)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch event")?;

    Ok(row.map(JoinedEventRow::into_joined))
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn insert(pool: &SqlitePool, input: &EventInput) -> Result<String> {
    let id = uuid::Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO events (
            id, title, date, time, category_id, event_type_id, legacy_type,
            location, location_url, description, image_url
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&input.title)
    .bind(&input.date)
    .bind(&input.time)
    .bind(&input.category_id)
    .bind(&input.event_type_id)
    .bind(&input.legacy_type)
    .bind(&input.location)
    .bind(&input.location_url)
    .bind(&input.description)
    .bind(&input.image_url)
    .execute(pool)
    .await
    .context("Failed to insert event")?;

    Ok(id)
}

/// Returns false when no event has that id.
pub async fn update(pool: &SqlitePool, event_id: &str, input: &EventInput) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE events SET
            title = ?, date = ?, time = ?, category_id = ?, event_type_id = ?,
            legacy_type = ?, location = ?, location_url = ?, description = ?, image_url = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.title)
    .bind(&input.date)
    .bind(&input.time)
    .bind(&input.category_id)
    .bind(&input.event_type_id)
    .bind(&input.legacy_type)
    .bind(&input.location)
    .bind(&input.location_url)
    .bind(&input.description)
    .bind(&input.image_url)
    .bind(event_id)
    .execute(pool)
    .await
    .context("Failed to update event")?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, event_id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(event_id)
        .execute(pool)
        .await
        .context("Failed to delete event")?;

    Ok(result.rows_affected() > 0)
}
