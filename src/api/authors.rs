//! Author pages: list, detail, create, update, delete

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    error::AppResult,
    models::{AuthorDraft, AuthorForm},
    services::{authors::AuthorDeletion, FormOutcome},
    views, AppState,
};

const AUTHOR_LIST: &str = "/catalog/authors";

/// Display list of all authors
pub async fn author_list(State(state): State<AppState>) -> AppResult<Html<String>> {
    tracing::debug!("author_list called");
    let authors = state.services.authors.list().await?;
    Ok(Html(views::authors::list(&authors)))
}

/// Display detail page for a specific author
pub async fn author_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    tracing::debug!(author_id = %id, "author_detail called");
    let detail = state.services.authors.detail(&id).await?;
    Ok(Html(views::authors::detail(&detail)))
}

/// Display the empty author form
pub async fn author_create_get() -> Html<String> {
    tracing::debug!("author_create_get called");
    Html(views::authors::form("Create Author", &AuthorDraft::default(), &[]))
}

/// Handle author create
pub async fn author_create_post(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    tracing::debug!("author_create_post called");
    Ok(match state.services.authors.create(&form).await? {
        FormOutcome::Saved(author) => Redirect::to(&author.url()).into_response(),
        FormOutcome::Rejected { draft, errors } => {
            Html(views::authors::form("Create Author", &draft, &errors)).into_response()
        }
    })
}

/// Display the author form filled with the stored values
pub async fn author_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    tracing::debug!(author_id = %id, "author_update_get called");
    let author = state.services.authors.get(&id).await?;
    Ok(Html(views::authors::form("Update Author", &AuthorDraft::from(&author), &[])))
}

/// Handle author update
pub async fn author_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    tracing::debug!(author_id = %id, "author_update_post called");
    Ok(match state.services.authors.update(&id, &form).await? {
        FormOutcome::Saved(author) => Redirect::to(&author.url()).into_response(),
        FormOutcome::Rejected { draft, errors } => {
            Html(views::authors::form("Update Author", &draft, &errors)).into_response()
        }
    })
}

/// Display the delete confirmation, or go back to the list if the author is gone
pub async fn author_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    tracing::debug!(author_id = %id, "author_delete_get called");
    Ok(match state.services.authors.delete_confirmation(&id).await? {
        Some(detail) => Html(views::authors::delete(&detail)).into_response(),
        None => Redirect::to(AUTHOR_LIST).into_response(),
    })
}

/// Handle author delete. Refused, with the same page, while books reference it.
pub async fn author_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    tracing::debug!(author_id = %id, "author_delete_post called");
    Ok(match state.services.authors.delete(&id).await? {
        AuthorDeletion::Blocked(detail) => Html(views::authors::delete(&detail)).into_response(),
        AuthorDeletion::Deleted | AuthorDeletion::Missing => {
            Redirect::to(AUTHOR_LIST).into_response()
        }
    })
}
