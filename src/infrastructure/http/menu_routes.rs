//! Menu form routes
//!
//! `GET /` renders the empty menu form. `POST /` creates a menu item and
//! answers `{"message": "success"}`; a submission that does not validate
//! gets the empty form again.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::application::services::MenuItemError;
use crate::infrastructure::http::{FormBodyRejection, MenuFormBody};
use crate::infrastructure::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: &'static str,
}

impl SubmissionResponse {
    pub fn success() -> Self {
        Self { message: "success" }
    }
}

/// Render the empty menu form
pub async fn show_form(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_form(&state)
}

/// Validate a submitted menu form and create a menu item
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    body: Result<MenuFormBody, FormBodyRejection>,
) -> Result<Response, (StatusCode, String)> {
    let form = match body {
        Ok(MenuFormBody(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "Unreadable menu form body");
            return render_form(&state).map(IntoResponse::into_response);
        }
    };

    match state.menu_item_service.submit(form).await {
        Ok(_) => Ok(Json(SubmissionResponse::success()).into_response()),
        Err(MenuItemError::Validation(_)) => render_form(&state).map(IntoResponse::into_response),
        Err(e) => {
            error!("Menu item submission failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

fn render_form(state: &AppState) -> Result<Html<String>, (StatusCode, String)> {
    state
        .templates
        .render_menu_form()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
