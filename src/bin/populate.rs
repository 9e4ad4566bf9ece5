//! Reset the catalog and load the fixture authors and books.
//!
//! Uses the same configuration as the server (`DATABASE_URL` or
//! `config/default.toml`).

use local_library::{config::AppConfig, logging, repository, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let _log_guard = logging::init(&config.logging);

    tracing::info!("Populating catalog");

    let store = repository::connect(&config.database).await?;
    let report = seed::populate(store.as_ref()).await?;

    tracing::info!(
        authors = report.authors_created,
        books = report.books_created,
        "Catalog populated"
    );
    Ok(())
}
