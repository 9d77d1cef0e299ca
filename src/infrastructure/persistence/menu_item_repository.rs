use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::{MenuItemRepositoryPort, RepositoryError};
use crate::domain::entities::MenuItem;

pub struct SqliteMenuItemRepository {
    pool: SqlitePool,
}

impl SqliteMenuItemRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Create table if not exists
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS menu_items (
                id TEXT PRIMARY KEY,
                item_name TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl MenuItemRepositoryPort for SqliteMenuItemRepository {
    async fn create(&self, item: &MenuItem) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO menu_items (id, item_name, category, description, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(item.id.to_string())
        .bind(&item.item_name)
        .bind(&item.category)
        .bind(&item.description)
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
