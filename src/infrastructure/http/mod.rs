//! HTTP routes

mod form_body;
mod menu_routes;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use form_body::{FormBodyRejection, MenuFormBody};

/// Create all routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/",
            get(menu_routes::show_form).post(menu_routes::submit_form),
        )
}

async fn health_check() -> &'static str {
    "OK"
}
