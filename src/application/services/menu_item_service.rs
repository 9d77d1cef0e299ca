//! Menu Item Service - Application service for menu item submissions
//!
//! Validates a submitted menu form and creates exactly one menu item per
//! accepted submission.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::dto::{FormErrors, MenuForm};
use crate::application::ports::outbound::{MenuItemRepositoryPort, RepositoryError};
use crate::domain::entities::MenuItem;

#[derive(Debug, thiserror::Error)]
pub enum MenuItemError {
    #[error(transparent)]
    Validation(#[from] FormErrors),
    #[error("Failed to store menu item: {0}")]
    Repository(#[from] RepositoryError),
}

/// Menu item service trait defining the application use cases
#[async_trait]
pub trait MenuItemService: Send + Sync {
    /// Validate a submitted form and persist it as a new menu item
    async fn submit(&self, form: MenuForm) -> Result<MenuItem, MenuItemError>;
}

/// Default implementation of MenuItemService backed by a repository port
pub struct MenuItemServiceImpl {
    repository: Arc<dyn MenuItemRepositoryPort>,
}

impl MenuItemServiceImpl {
    pub fn new(repository: Arc<dyn MenuItemRepositoryPort>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MenuItemService for MenuItemServiceImpl {
    #[instrument(skip(self, form))]
    async fn submit(&self, form: MenuForm) -> Result<MenuItem, MenuItemError> {
        let cleaned = form.validate().inspect_err(|errors| {
            debug!(fields = ?errors.fields(), "Rejected menu form");
        })?;

        let item = MenuItem::new(cleaned.item_name, cleaned.category, cleaned.description);
        self.repository.create(&item).await?;

        info!(item_id = %item.id, item_name = %item.item_name, "Created menu item");
        Ok(item)
    }
}
