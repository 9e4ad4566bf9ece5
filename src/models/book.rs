//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::author::Author;
use crate::validation::{check, lenient_string, sanitize, Submission};

/// Full book record from the store.
///
/// `author` holds the referenced author id; it is not checked on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub summary: String,
    pub isbn: String,
}

impl Book {
    /// Detail page locator
    pub fn url(&self) -> String {
        book_url(&self.id)
    }
}

pub fn book_url(id: &str) -> String {
    format!("/catalog/book/{}", id)
}

/// Book with its author reference resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookWithAuthor {
    pub book: Book,
    /// `None` when the reference does not resolve
    pub author: Option<Author>,
}

/// Validated book fields, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub isbn: String,
}

impl BookInput {
    pub fn into_book(self, id: String) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            summary: self.summary,
            isbn: self.isbn,
        }
    }
}

/// Raw book submission, from the HTML form or the JSON API.
///
/// Absent or `null` fields read as empty so they fail validation instead of
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookForm {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Author id
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub isbn: String,
}

impl BookForm {
    /// Sanitize every field, then run the book rules on the result
    pub fn validate(&self) -> Submission<BookInput, BookDraft> {
        let draft = BookDraft {
            title: sanitize(&self.title),
            author: sanitize(&self.author),
            summary: sanitize(&self.summary),
            isbn: sanitize(&self.isbn),
        };

        let errors = check(
            &draft,
            &[
                ("title", draft.title.as_str()),
                ("author", draft.author.as_str()),
                ("summary", draft.summary.as_str()),
                ("isbn", draft.isbn.as_str()),
            ],
        );
        if !errors.is_empty() {
            return Submission::Invalid { draft, errors };
        }
        Submission::Valid(draft.into())
    }
}

/// Sanitized book values shown in the form, valid or not
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct BookDraft {
    #[validate(length(min = 1, message = "Title must not be empty."))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty."))]
    pub author: String,
    #[validate(length(min = 1, message = "Summary must not be empty."))]
    pub summary: String,
    #[validate(length(min = 1, message = "ISBN must not be empty."))]
    pub isbn: String,
}

impl From<BookDraft> for BookInput {
    fn from(d: BookDraft) -> Self {
        Self {
            title: d.title,
            author: d.author,
            summary: d.summary,
            isbn: d.isbn,
        }
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
        }
    }
}
