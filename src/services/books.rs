//! Book service

use super::FormOutcome;
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookDraft, BookForm, BookWithAuthor},
    repository::Repository,
    validation::Submission,
};

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All books sorted by title, authors populated
    pub async fn list(&self) -> AppResult<Vec<BookWithAuthor>> {
        self.repository.list_books().await
    }

    /// Get book by ID with its author
    pub async fn detail(&self, id: &str) -> AppResult<BookWithAuthor> {
        self.repository
            .find_book(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Choices for the author selector of the book form
    pub async fn authors(&self) -> AppResult<Vec<Author>> {
        self.repository.list_authors().await
    }

    /// Existing book and the author choices, for the update form
    pub async fn edit(&self, id: &str) -> AppResult<(BookWithAuthor, Vec<Author>)> {
        let (book, authors) = tokio::try_join!(
            self.repository.find_book(id),
            self.repository.list_authors()
        )?;
        let book = book.ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;
        Ok((book, authors))
    }

    pub async fn create(&self, form: &BookForm) -> AppResult<FormOutcome<Book, BookDraft>> {
        match form.validate() {
            Submission::Invalid { draft, errors } => Ok(FormOutcome::Rejected { draft, errors }),
            Submission::Valid(input) => {
                let book = self.repository.create_book(&input).await?;
                tracing::info!(book_id = %book.id, author_id = %book.author, "Book created");
                Ok(FormOutcome::Saved(book))
            }
        }
    }

    /// Replace an existing book with the submitted fields
    pub async fn update(
        &self,
        id: &str,
        form: &BookForm,
    ) -> AppResult<FormOutcome<Book, BookDraft>> {
        match form.validate() {
            Submission::Invalid { draft, errors } => Ok(FormOutcome::Rejected { draft, errors }),
            Submission::Valid(input) => {
                let book = self
                    .repository
                    .update_book(id, &input)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;
                tracing::info!(book_id = %book.id, "Book updated");
                Ok(FormOutcome::Saved(book))
            }
        }
    }

    /// What the delete confirmation page shows. `None` when the book is gone.
    pub async fn delete_confirmation(&self, id: &str) -> AppResult<Option<BookWithAuthor>> {
        self.repository.find_book(id).await
    }

    /// Returns `false` when there was nothing to delete
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let deleted = self.repository.delete_book(id).await?;
        if deleted {
            tracing::info!(book_id = %id, "Book deleted");
        }
        Ok(deleted)
    }
}
