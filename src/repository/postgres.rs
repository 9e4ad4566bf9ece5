//! PostgreSQL store

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use super::{new_id, EntityStore};
use crate::{
    error::AppResult,
    models::{Author, AuthorInput, Book, BookInput, BookWithAuthor},
};

const AUTHOR_COLUMNS: &str = "id, first_name, family_name, date_of_birth, date_of_death";
const BOOK_COLUMNS: &str = "id, title, author, summary, isbn";

/// Books joined with their author. Author columns are aliased and nullable.
const BOOK_WITH_AUTHOR_SELECT: &str = r#"
    SELECT b.id, b.title, b.author, b.summary, b.isbn,
           a.id AS a_id, a.first_name AS a_first_name, a.family_name AS a_family_name,
           a.date_of_birth AS a_date_of_birth, a.date_of_death AS a_date_of_death
    FROM books b
    LEFT JOIN authors a ON a.id = b.author
"#;

#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn book_with_author(row: &PgRow) -> BookWithAuthor {
        let author_id: Option<String> = row.get("a_id");
        BookWithAuthor {
            book: Book {
                id: row.get("id"),
                title: row.get("title"),
                author: row.get("author"),
                summary: row.get("summary"),
                isbn: row.get("isbn"),
            },
            author: author_id.map(|id| Author {
                id,
                first_name: row.get("a_first_name"),
                family_name: row.get("a_family_name"),
                date_of_birth: row.get("a_date_of_birth"),
                date_of_death: row.get("a_date_of_death"),
            }),
        }
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // =========================================================================
    // AUTHORS
    // =========================================================================

    async fn count_authors(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        let query = format!(
            r#"SELECT {} FROM authors ORDER BY family_name COLLATE "C", first_name COLLATE "C""#,
            AUTHOR_COLUMNS
        );
        let rows = sqlx::query_as::<_, Author>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_author(&self, id: &str) -> AppResult<Option<Author>> {
        let query = format!("SELECT {} FROM authors WHERE id = $1", AUTHOR_COLUMNS);
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    async fn find_author_by_name(
        &self,
        first_name: &str,
        family_name: &str,
    ) -> AppResult<Option<Author>> {
        let query = format!(
            "SELECT {} FROM authors WHERE first_name = $1 AND family_name = $2 LIMIT 1",
            AUTHOR_COLUMNS
        );
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(first_name)
            .bind(family_name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    async fn create_author(&self, author: &AuthorInput) -> AppResult<Author> {
        let query = format!(
            r#"
            INSERT INTO authors (id, first_name, family_name, date_of_birth, date_of_death)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            AUTHOR_COLUMNS
        );
        let row = sqlx::query_as::<_, Author>(&query)
            .bind(new_id())
            .bind(&author.first_name)
            .bind(&author.family_name)
            .bind(author.date_of_birth)
            .bind(author.date_of_death)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_author(&self, id: &str, author: &AuthorInput) -> AppResult<Option<Author>> {
        let query = format!(
            r#"
            UPDATE authors
            SET first_name = $2, family_name = $3, date_of_birth = $4, date_of_death = $5
            WHERE id = $1
            RETURNING {}
            "#,
            AUTHOR_COLUMNS
        );
        let row = sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(&author.first_name)
            .bind(&author.family_name)
            .bind(author.date_of_birth)
            .bind(author.date_of_death)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_author(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_authors(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM authors").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    // BOOKS
    // =========================================================================

    async fn count_books(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_books_by_author(&self, author_id: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list_books(&self) -> AppResult<Vec<BookWithAuthor>> {
        let query = format!(r#"{} ORDER BY b.title COLLATE "C""#, BOOK_WITH_AUTHOR_SELECT);
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(Self::book_with_author).collect())
    }

    async fn books_by_author(&self, author_id: &str) -> AppResult<Vec<Book>> {
        let query = format!(
            r#"SELECT {} FROM books WHERE author = $1 ORDER BY title COLLATE "C""#,
            BOOK_COLUMNS
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_book(&self, id: &str) -> AppResult<Option<BookWithAuthor>> {
        let query = format!("{} WHERE b.id = $1", BOOK_WITH_AUTHOR_SELECT);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(Self::book_with_author))
    }

    async fn create_book(&self, book: &BookInput) -> AppResult<Book> {
        let query = format!(
            r#"
            INSERT INTO books (id, title, author, summary, isbn)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(new_id())
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.summary)
            .bind(&book.isbn)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_book(&self, id: &str, book: &BookInput) -> AppResult<Option<Book>> {
        let query = format!(
            r#"
            UPDATE books
            SET title = $2, author = $3, summary = $4, isbn = $5
            WHERE id = $1
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.summary)
            .bind(&book.isbn)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_book(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_books(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
