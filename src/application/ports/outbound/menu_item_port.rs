use async_trait::async_trait;

use crate::domain::entities::MenuItem;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Storage for menu items. Items are only ever inserted.
#[async_trait]
pub trait MenuItemRepositoryPort: Send + Sync {
    async fn create(&self, item: &MenuItem) -> Result<(), RepositoryError>;
}
