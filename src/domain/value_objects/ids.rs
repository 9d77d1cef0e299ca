//! Strongly-typed identifiers for domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a persisted menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(Uuid);

impl MenuItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MenuItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for MenuItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
