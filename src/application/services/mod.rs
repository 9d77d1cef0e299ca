//! Application services - Use case implementations
//!
//! Each service accepts its repository dependencies as ports and returns
//! domain entities.

pub mod menu_item_service;

pub use menu_item_service::{MenuItemError, MenuItemService, MenuItemServiceImpl};
