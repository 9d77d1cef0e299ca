//! SQLite persistence adapters

mod menu_item_repository;

pub use menu_item_repository::SqliteMenuItemRepository;

use std::path::Path;

use anyhow::{Context, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

/// Open the SQLite database at `path`, creating the file and its parent
/// directory when missing.
pub async fn connect(path: &str) -> Result<SqlitePool> {
    if let Some(parent) = Path::new(path).parent() {
        std::fs::create_dir_all(parent).context("Failed to create database directory")?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .context("Failed to connect to SQLite database")?;
    tracing::info!("Connected to SQLite database: {}", path);

    Ok(pool)
}
