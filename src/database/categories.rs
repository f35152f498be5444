// file: src/database/categories.rs
use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::models::{Category, CategoryInput};

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, color, contact_name, contact_phone FROM categories ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .context("Failed to fetch categories")?;

    Ok(categories)
}

pub async fn insert(pool: &SqlitePool, input: &CategoryInput) -> Result<String> {
    let id = uuid::Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO categories (id, name, color, contact_name, contact_phone) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&input.name)
    .bind(&input.color)
    .bind(&input.contact_name)
    .bind(&input.contact_phone)
    .execute(pool)
    .await
    .context("Failed to insert category")?;

    Ok(id)
}

pub async fn update(pool: &SqlitePool, category_id: &str, input: &CategoryInput) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE categories SET name = ?, color = ?, contact_name = ?, contact_phone = ? WHERE id = ?",
    )
    .bind(&input.name)
    .bind(&input.color)
    .bind(&input.contact_name)
    .bind(&input.contact_phone)
    .bind(category_id)
    .execute(pool)
    .await
    .context("Failed to update category")?;

    Ok(result.rows_affected() > 0)
}

/// Deleting a category removes its events too (ON DELETE CASCADE).
pub async fn delete(pool: &SqlitePool, category_id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM categories WHERE id = ?")
        .bind(category_id)
        .execute(pool)
        .await
        .context("Failed to delete category")?;

    Ok(result.rows_affected() > 0)
}
