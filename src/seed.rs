//! Fixture data for a fresh catalog

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{AuthorInput, BookInput},
    repository::EntityStore,
};

struct SeedAuthor {
    first_name: &'static str,
    family_name: &'static str,
    born: Option<(i32, u32, u32)>,
    died: Option<(i32, u32, u32)>,
}

struct SeedBook {
    title: &'static str,
    summary: &'static str,
    isbn: &'static str,
    /// Index into `AUTHORS`
    author: usize,
}

const AUTHORS: [SeedAuthor; 2] = [
    SeedAuthor {
        first_name: "Denis",
        family_name: "DUPONT",
        born: Some((1965, 2, 9)),
        died: None,
    },
    SeedAuthor {
        first_name: "BOB",
        family_name: "Synclair",
        born: Some((1963, 12, 12)),
        died: Some((2022, 12, 12)),
    },
];

const BOOKS: [SeedBook; 3] = [
    SeedBook {
        title: "Le CSS en action",
        summary: "GRID / FLEX en action",
        isbn: "111111111111",
        author: 0,
    },
    SeedBook {
        title: "Le Rock par la pratique",
        summary: "Devenez danceur de saloom",
        isbn: "222222222222",
        author: 1,
    },
    SeedBook {
        title: "Le JS en action",
        summary: "Les closures n'ont plus de secret",
        isbn: "xxxxxxxxxxxx",
        author: 1,
    },
];

/// What a seed run wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub authors_removed: u64,
    pub books_removed: u64,
    pub authors_created: usize,
    pub books_created: usize,
}

fn date(parts: Option<(i32, u32, u32)>) -> Option<NaiveDate> {
    parts.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

/// Wipe both collections and write the fixture authors and books.
///
/// Book references are resolved by looking the authors up by name after they
/// are written; a missing author aborts the run before any book is created.
pub async fn populate(store: &dyn EntityStore) -> AppResult<SeedReport> {
    let books_removed = store.delete_all_books().await?;
    let authors_removed = store.delete_all_authors().await?;
    tracing::info!(authors_removed, books_removed, "Store cleared");

    for seed in &AUTHORS {
        let author = store
            .create_author(&AuthorInput {
                first_name: seed.first_name.to_string(),
                family_name: seed.family_name.to_string(),
                date_of_birth: date(seed.born),
                date_of_death: date(seed.died),
            })
            .await?;
        tracing::info!(author_id = %author.id, name = %author.name(), "Seed author created");
    }

    let mut author_ids = Vec::with_capacity(AUTHORS.len());
    for seed in &AUTHORS {
        let author = store
            .find_author_by_name(seed.first_name, seed.family_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Seed author {} {} not found after creation",
                    seed.first_name, seed.family_name
                ))
            })?;
        author_ids.push(author.id);
    }

    for seed in &BOOKS {
        let book = store
            .create_book(&BookInput {
                title: seed.title.to_string(),
                author: author_ids[seed.author].clone(),
                summary: seed.summary.to_string(),
                isbn: seed.isbn.to_string(),
            })
            .await?;
        tracing::info!(book_id = %book.id, title = %book.title, "Seed book created");
    }

    Ok(SeedReport {
        authors_removed,
        books_removed,
        authors_created: AUTHORS.len(),
        books_created: BOOKS.len(),
    })
}
