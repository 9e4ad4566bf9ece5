//! Business logic services

pub mod authors;
pub mod books;
pub mod catalog;

use crate::{repository::Repository, validation::FieldError};

/// Where a create or update submission ended up.
///
/// `Rejected` means nothing was written; the draft and errors go back to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome<T, D> {
    Saved(T),
    Rejected { draft: D, errors: Vec<FieldError> },
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub authors: authors::AuthorService,
    pub books: books::BookService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            authors: authors::AuthorService::new(repository.clone()),
            books: books::BookService::new(repository.clone()),
            repository,
        }
    }
}
