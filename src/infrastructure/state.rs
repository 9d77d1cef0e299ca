//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::application::services::{MenuItemService, MenuItemServiceImpl};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{self, SqliteMenuItemRepository};
use crate::infrastructure::templates::Templates;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub templates: Templates,
    pub menu_item_service: Arc<dyn MenuItemService>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let pool = persistence::connect(&config.database_path).await?;
        Self::with_pool(config, pool).await
    }

    /// Build state on top of an existing pool
    pub async fn with_pool(config: AppConfig, pool: SqlitePool) -> Result<Self> {
        let repository = SqliteMenuItemRepository::new(pool)
            .await
            .context("Failed to initialize menu item table")?;

        let templates = Templates::new().context("Failed to load templates")?;

        let menu_item_service = Arc::new(MenuItemServiceImpl::new(Arc::new(repository)));

        Ok(Self {
            config,
            templates,
            menu_item_service,
        })
    }
}
