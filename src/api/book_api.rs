//! JSON endpoint for creating books

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, AppError},
    models::BookForm,
    services::FormOutcome,
    AppState,
};

/// Body returned once a book is stored
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedBook {
    pub id: String,
    pub title: String,
    /// Detail page locator, also sent as `Location`
    pub url: String,
}

/// Create a book from JSON
#[utoipa::path(
    post,
    path = "/catalog/api/book",
    tag = "books",
    request_body = BookForm,
    responses(
        (status = 201, description = "Book created", body = CreatedBook),
        (
            status = 400,
            description = "Missing or empty fields",
            body = crate::error::ValidationErrorResponse
        ),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookForm>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CreatedBook>), ApiError> {
    tracing::debug!("api create_book called");
    let form = match payload {
        Ok(Json(form)) => form,
        // No JSON body at all reads as an empty submission
        Err(JsonRejection::MissingJsonContentType(_)) => BookForm::default(),
        Err(rejection) => return Err(AppError::BadRequest(rejection.body_text()).into()),
    };
    match state.services.books.create(&form).await? {
        FormOutcome::Saved(book) => {
            let url = book.url();
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, url.clone())],
                Json(CreatedBook {
                    id: book.id,
                    title: book.title,
                    url,
                }),
            ))
        }
        FormOutcome::Rejected { errors, .. } => Err(AppError::Validation(errors).into()),
    }
}
