//! HTTP handlers and the route table

pub mod authors;
pub mod book_api;
pub mod books;
pub mod health;
pub mod home;
pub mod openapi;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Every catalog route lives under this prefix
pub const CATALOG_PREFIX: &str = "/catalog";

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        .route("/", get(home::index))
        // Books
        .route(
            "/book/create",
            get(books::book_create_get).post(books::book_create_post),
        )
        .route(
            "/book/:id/delete",
            get(books::book_delete_get).post(books::book_delete_post),
        )
        .route(
            "/book/:id/update",
            get(books::book_update_get).post(books::book_update_post),
        )
        .route("/book/:id", get(books::book_detail))
        .route("/books", get(books::book_list))
        .route("/api/book", post(book_api::create_book))
        // Authors
        .route(
            "/author/create",
            get(authors::author_create_get).post(authors::author_create_post),
        )
        .route(
            "/author/:id/delete",
            get(authors::author_delete_get).post(authors::author_delete_post),
        )
        .route(
            "/author/:id/update",
            get(authors::author_update_get).post(authors::author_update_post),
        )
        .route("/author/:id", get(authors::author_detail))
        .route("/authors", get(authors::author_list));

    Router::new()
        .route("/", get(|| async { Redirect::to(CATALOG_PREFIX) }))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/catalog/", get(home::index))
        .nest(CATALOG_PREFIX, catalog)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
}
