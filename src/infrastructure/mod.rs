//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: SQLite adapter for menu item storage
//! - HTTP: form page and submission routes
//! - Templates: HTML rendering of the menu form
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
pub mod templates;
