// file: src/database/documents.rs
use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::models::Document;

/// Newest first.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Document>> {
    let documents = sqlx::query_as::<_, Document>(
        "SELECT id, title, url, created_at FROM documents ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await
    .context("Failed to fetch documents")?;

    Ok(documents)
}

pub async fn get(pool: &SqlitePool, document_id: &str) -> Result<Option<Document>> {
    let document = sqlx::query_as::<_, Document>("SELECT id, title, url, created_at FROM documents WHERE id = ?")
        .bind(document_id)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch document")?;

    Ok(document)
}

pub async fn insert(pool: &SqlitePool, title: &str, url: &str) -> Result<Document> {
    let document = Document {
        id: uuid::Uuid::new_v4().to_string(),
        title: title.to_string(),
        url: url.to_string(),
        created_at: chrono::Utc::now(),
    };

    sqlx::query("INSERT INTO documents (id, title, url, created_at) VALUES (?, ?, ?, ?)")
        .bind(&document.id)
        .bind(&document.title)
        .bind(&document.url)
        .bind(document.created_at)
        .execute(pool)
        .await
        .context("Failed to insert document")?;

    Ok(document)
}

pub async fn delete(pool: &SqlitePool, document_id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM documents WHERE id = ?")
        .bind(document_id)
        .execute(pool)
        .await
        .context("Failed to delete document")?;

    Ok(result.rows_affected() > 0)
}
