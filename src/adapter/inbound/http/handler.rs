//! Route handlers.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::{error, info};

use super::error::HttpError;
use super::page::Notice;
use super::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    notice: Option<String>,
}

/// `GET /`
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, HttpError> {
    let current = state.service.view_current().await?;
    let notice = query.notice.as_deref().and_then(Notice::from_code);
    let html = state.page.render(&current, state.ip.as_deref(), notice)?;
    Ok(Html(html))
}

/// `POST /generate`
pub async fn generate(State(state): State<AppState>) -> Redirect {
    match state.service.generate_and_store().await {
        Ok(quote) => {
            info!(quote_id = %quote.id, "Quote generated via web");
            Redirect::to("/")
        }
        Err(err) => {
            error!(error = %err, "Quote generation failed");
            Redirect::to(Notice::GenerateFailed.location())
        }
    }
}

/// `POST /clear`
pub async fn clear(State(state): State<AppState>) -> Redirect {
    match state.service.clear().await {
        Ok(deleted) => {
            info!(deleted, "Quotes cleared via web");
            Redirect::to("/")
        }
        Err(err) => {
            error!(error = %err, "Clearing quotes failed");
            Redirect::to(Notice::ClearFailed.location())
        }
    }
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
