//! Author service: validation, persistence and the delete guard

use super::FormOutcome;
use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorDetail, AuthorDraft, AuthorForm},
    repository::Repository,
    validation::Submission,
};

/// Result of a delete request on an author
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorDeletion {
    Deleted,
    /// Books still reference the author; nothing was removed
    Blocked(AuthorDetail),
    /// No author has this id
    Missing,
}

#[derive(Clone)]
pub struct AuthorService {
    repository: Repository,
}

impl AuthorService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All authors, sorted by family name
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.list_authors().await
    }

    /// Get author by ID
    pub async fn get(&self, id: &str) -> AppResult<Author> {
        self.repository
            .find_author(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }

    /// Author with the books that reference it
    pub async fn detail(&self, id: &str) -> AppResult<AuthorDetail> {
        self.find_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }

    pub async fn create(&self, form: &AuthorForm) -> AppResult<FormOutcome<Author, AuthorDraft>> {
        match form.validate() {
            Submission::Invalid { draft, errors } => Ok(FormOutcome::Rejected { draft, errors }),
            Submission::Valid(input) => {
                let author = self.repository.create_author(&input).await?;
                tracing::info!(author_id = %author.id, "Author created");
                Ok(FormOutcome::Saved(author))
            }
        }
    }

    /// Replace an existing author with the submitted fields
    pub async fn update(
        &self,
        id: &str,
        form: &AuthorForm,
    ) -> AppResult<FormOutcome<Author, AuthorDraft>> {
        match form.validate() {
            Submission::Invalid { draft, errors } => Ok(FormOutcome::Rejected { draft, errors }),
            Submission::Valid(input) => {
                let author = self
                    .repository
                    .update_author(id, &input)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;
                tracing::info!(author_id = %author.id, "Author updated");
                Ok(FormOutcome::Saved(author))
            }
        }
    }

    /// An author may only be deleted once no book references it
    pub async fn can_delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.repository.count_books_by_author(id).await? == 0)
    }

    /// What the delete confirmation page shows. `None` when the author is gone.
    pub async fn delete_confirmation(&self, id: &str) -> AppResult<Option<AuthorDetail>> {
        self.find_detail(id).await
    }

    /// Delete the author unless books still reference it
    pub async fn delete(&self, id: &str) -> AppResult<AuthorDeletion> {
        let Some(author) = self.repository.find_author(id).await? else {
            return Ok(AuthorDeletion::Missing);
        };

        if !self.can_delete(id).await? {
            let books = self.repository.books_by_author(id).await?;
            tracing::info!(
                author_id = %id,
                books = books.len(),
                "Refusing to delete author with books"
            );
            return Ok(AuthorDeletion::Blocked(AuthorDetail { author, books }));
        }

        if self.repository.delete_author(id).await? {
            tracing::info!(author_id = %id, "Author deleted");
            Ok(AuthorDeletion::Deleted)
        } else {
            Ok(AuthorDeletion::Missing)
        }
    }

    async fn find_detail(&self, id: &str) -> AppResult<Option<AuthorDetail>> {
        let (author, books) = tokio::try_join!(
            self.repository.find_author(id),
            self.repository.books_by_author(id)
        )?;
        Ok(author.map(|author| AuthorDetail { author, books }))
    }
}
