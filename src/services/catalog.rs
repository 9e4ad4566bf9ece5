//! Catalog overview service

use serde::Serialize;

use crate::{error::AppResult, repository::Repository};

/// Entity counts shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub author_count: i64,
    pub book_count: i64,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let (author_count, book_count) =
            tokio::try_join!(self.repository.count_authors(), self.repository.count_books())?;
        Ok(CatalogCounts {
            author_count,
            book_count,
        })
    }
}
