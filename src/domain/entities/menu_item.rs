//! MenuItem entity - A food or drink entry on the menu

use chrono::{DateTime, Utc};

use crate::domain::value_objects::MenuItemId;

/// A menu item, created once per accepted form submission
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub item_name: String,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    pub fn new(
        item_name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: MenuItemId::new(),
            item_name: item_name.into(),
            category: category.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}
