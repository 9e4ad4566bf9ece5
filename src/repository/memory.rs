//! In-process store, used for tests and `memory://` databases

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{new_id, EntityStore};
use crate::{
    error::AppResult,
    models::{Author, AuthorInput, Book, BookInput, BookWithAuthor},
};

#[derive(Default)]
struct Collections {
    authors: IndexMap<String, Author>,
    books: IndexMap<String, Book>,
}

impl Collections {
    fn populate(&self, book: &Book) -> BookWithAuthor {
        BookWithAuthor {
            book: book.clone(),
            author: self.authors.get(&book.author).cloned(),
        }
    }
}

/// Insertion-ordered collections behind one lock
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn count_authors(&self) -> AppResult<i64> {
        Ok(self.data.read().await.authors.len() as i64)
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        let data = self.data.read().await;
        let mut authors: Vec<Author> = data.authors.values().cloned().collect();
        authors.sort_by(|a, b| {
            a.family_name
                .cmp(&b.family_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });
        Ok(authors)
    }

    async fn find_author(&self, id: &str) -> AppResult<Option<Author>> {
        Ok(self.data.read().await.authors.get(id).cloned())
    }

    async fn find_author_by_name(
        &self,
        first_name: &str,
        family_name: &str,
    ) -> AppResult<Option<Author>> {
        let data = self.data.read().await;
        Ok(data
            .authors
            .values()
            .find(|a| a.first_name == first_name && a.family_name == family_name)
            .cloned())
    }

    async fn create_author(&self, author: &AuthorInput) -> AppResult<Author> {
        let author = author.clone().into_author(new_id());
        self.data
            .write()
            .await
            .authors
            .insert(author.id.clone(), author.clone());
        Ok(author)
    }

    async fn update_author(&self, id: &str, author: &AuthorInput) -> AppResult<Option<Author>> {
        let mut data = self.data.write().await;
        Ok(data.authors.get_mut(id).map(|slot| {
            *slot = author.clone().into_author(id.to_string());
            slot.clone()
        }))
    }

    async fn delete_author(&self, id: &str) -> AppResult<bool> {
        Ok(self.data.write().await.authors.shift_remove(id).is_some())
    }

    async fn delete_all_authors(&self) -> AppResult<u64> {
        let mut data = self.data.write().await;
        let removed = data.authors.len() as u64;
        data.authors.clear();
        Ok(removed)
    }

    async fn count_books(&self) -> AppResult<i64> {
        Ok(self.data.read().await.books.len() as i64)
    }

    async fn count_books_by_author(&self, author_id: &str) -> AppResult<i64> {
        let data = self.data.read().await;
        Ok(data.books.values().filter(|b| b.author == author_id).count() as i64)
    }

    async fn list_books(&self) -> AppResult<Vec<BookWithAuthor>> {
        let data = self.data.read().await;
        let mut books: Vec<BookWithAuthor> =
            data.books.values().map(|b| data.populate(b)).collect();
        books.sort_by(|a, b| a.book.title.cmp(&b.book.title));
        Ok(books)
    }

    async fn books_by_author(&self, author_id: &str) -> AppResult<Vec<Book>> {
        let data = self.data.read().await;
        let mut books: Vec<Book> = data
            .books
            .values()
            .filter(|b| b.author == author_id)
            .cloned()
            .collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    async fn find_book(&self, id: &str) -> AppResult<Option<BookWithAuthor>> {
        let data = self.data.read().await;
        Ok(data.books.get(id).map(|b| data.populate(b)))
    }

    async fn create_book(&self, book: &BookInput) -> AppResult<Book> {
        let book = book.clone().into_book(new_id());
        self.data
            .write()
            .await
            .books
            .insert(book.id.clone(), book.clone());
        Ok(book)
    }

    async fn update_book(&self, id: &str, book: &BookInput) -> AppResult<Option<Book>> {
        let mut data = self.data.write().await;
        Ok(data.books.get_mut(id).map(|slot| {
            *slot = book.clone().into_book(id.to_string());
            slot.clone()
        }))
    }

    async fn delete_book(&self, id: &str) -> AppResult<bool> {
        Ok(self.data.write().await.books.shift_remove(id).is_some())
    }

    async fn delete_all_books(&self) -> AppResult<u64> {
        let mut data = self.data.write().await;
        let removed = data.books.len() as u64;
        data.books.clear();
        Ok(removed)
    }
}
