//! Catalog home page

use axum::{extract::State, response::Html};

use crate::{error::AppResult, views, AppState};

/// Home page with author and book counts
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    tracing::debug!("index called");
    let counts = state.services.catalog.counts().await?;
    Ok(Html(views::index(&counts)))
}
