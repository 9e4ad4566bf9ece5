//! Data models for the catalog

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::{Author, AuthorDetail, AuthorDraft, AuthorForm, AuthorInput};
pub use book::{Book, BookDraft, BookForm, BookInput, BookWithAuthor};
