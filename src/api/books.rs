//! Book pages: list, detail, create, update, delete

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    error::AppResult,
    models::{BookDraft, BookForm},
    services::FormOutcome,
    views, AppState,
};

const BOOK_LIST: &str = "/catalog/books";

/// Display list of all books
pub async fn book_list(State(state): State<AppState>) -> AppResult<Html<String>> {
    tracing::debug!("book_list called");
    let books = state.services.books.list().await?;
    Ok(Html(views::books::list(&books)))
}

/// Display detail page for a specific book
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    tracing::debug!(book_id = %id, "book_detail called");
    let book = state.services.books.detail(&id).await?;
    Ok(Html(views::books::detail(&book)))
}

/// Display the empty book form with the author choices
pub async fn book_create_get(State(state): State<AppState>) -> AppResult<Html<String>> {
    tracing::debug!("book_create_get called");
    let authors = state.services.books.authors().await?;
    Ok(Html(views::books::form("Create Book", &authors, &BookDraft::default(), &[])))
}

/// Handle book create
pub async fn book_create_post(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    tracing::debug!("book_create_post called");
    Ok(match state.services.books.create(&form).await? {
        FormOutcome::Saved(book) => Redirect::to(&book.url()).into_response(),
        FormOutcome::Rejected { draft, errors } => {
            let authors = state.services.books.authors().await?;
            Html(views::books::form("Create Book", &authors, &draft, &errors)).into_response()
        }
    })
}

/// Display the book form filled with the stored values
pub async fn book_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    tracing::debug!(book_id = %id, "book_update_get called");
    let (book, authors) = state.services.books.edit(&id).await?;
    let draft = BookDraft::from(&book.book);
    Ok(Html(views::books::form("Update Book", &authors, &draft, &[])))
}

/// Handle book update
pub async fn book_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    tracing::debug!(book_id = %id, "book_update_post called");
    Ok(match state.services.books.update(&id, &form).await? {
        FormOutcome::Saved(book) => Redirect::to(&book.url()).into_response(),
        FormOutcome::Rejected { draft, errors } => {
            let authors = state.services.books.authors().await?;
            Html(views::books::form("Update Book", &authors, &draft, &errors)).into_response()
        }
    })
}

/// Display the delete confirmation, or go back to the list if the book is gone
pub async fn book_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    tracing::debug!(book_id = %id, "book_delete_get called");
    Ok(match state.services.books.delete_confirmation(&id).await? {
        Some(book) => Html(views::books::delete(&book)).into_response(),
        None => Redirect::to(BOOK_LIST).into_response(),
    })
}

/// Handle book delete
pub async fn book_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    tracing::debug!(book_id = %id, "book_delete_post called");
    state.services.books.delete(&id).await?;
    Ok(Redirect::to(BOOK_LIST))
}
