//! Repository layer: the entity store boundary

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;

use crate::{
    config::DatabaseConfig,
    error::AppResult,
    models::{Author, AuthorInput, Book, BookInput, BookWithAuthor},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Shared handle to whichever store backs the application
pub type Repository = Arc<dyn EntityStore>;

/// CRUD operations on authors and books.
///
/// Listing order is part of the contract: authors by `family_name` then
/// `first_name`, books by `title`, both in byte order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Cheap round trip used by the readiness check
    async fn ping(&self) -> AppResult<()>;

    async fn count_authors(&self) -> AppResult<i64>;
    async fn list_authors(&self) -> AppResult<Vec<Author>>;
    async fn find_author(&self, id: &str) -> AppResult<Option<Author>>;
    async fn find_author_by_name(
        &self,
        first_name: &str,
        family_name: &str,
    ) -> AppResult<Option<Author>>;
    async fn create_author(&self, author: &AuthorInput) -> AppResult<Author>;
    /// Full replace. `None` when no author has this id.
    async fn update_author(&self, id: &str, author: &AuthorInput) -> AppResult<Option<Author>>;
    /// `false` when no author has this id
    async fn delete_author(&self, id: &str) -> AppResult<bool>;
    async fn delete_all_authors(&self) -> AppResult<u64>;

    async fn count_books(&self) -> AppResult<i64>;
    async fn count_books_by_author(&self, author_id: &str) -> AppResult<i64>;
    /// All books with their author populated
    async fn list_books(&self) -> AppResult<Vec<BookWithAuthor>>;
    async fn books_by_author(&self, author_id: &str) -> AppResult<Vec<Book>>;
    async fn find_book(&self, id: &str) -> AppResult<Option<BookWithAuthor>>;
    async fn create_book(&self, book: &BookInput) -> AppResult<Book>;
    /// Full replace. `None` when no book has this id.
    async fn update_book(&self, id: &str, book: &BookInput) -> AppResult<Option<Book>>;
    /// `false` when no book has this id
    async fn delete_book(&self, id: &str) -> AppResult<bool>;
    async fn delete_all_books(&self) -> AppResult<u64>;
}

/// Store ids are opaque strings
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Open the store named by `database.url`.
///
/// `memory://` selects the in-process store; any other URL is handed to the
/// Postgres pool and the embedded migrations are applied.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Repository> {
    if config.url.starts_with("memory:") {
        tracing::warn!("Using in-memory store, data will not survive a restart");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(Arc::new(PgStore::new(pool)))
}
