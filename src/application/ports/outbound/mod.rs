//! Outbound ports - Interfaces that the application requires from external systems

mod menu_item_port;

pub use menu_item_port::{MenuItemRepositoryPort, RepositoryError};
