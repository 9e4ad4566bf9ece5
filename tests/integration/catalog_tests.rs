//! Server-rendered catalog flows

use std::sync::Arc;

use axum::http::StatusCode;
use local_library::repository::EntityStore;

use crate::common::{app, app_with, author_input, book_input, get, post_form, FailingStore};

#[tokio::test]
async fn test_root_redirects_to_catalog() {
    let (app, _) = app();
    let response = get(&app, "/").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), "/catalog");
}

#[tokio::test]
async fn test_catalog_with_trailing_slash_is_home() {
    let (app, _) = app();
    let response = get(&app, "/catalog/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Local Library Home"));
}

#[tokio::test]
async fn test_home_shows_counts() {
    let (app, store) = app();
    let author = store.create_author(&author_input("Denis", "DUPONT")).await.unwrap();
    store.create_book(&book_input("A", &author.id)).await.unwrap();
    store.create_book(&book_input("B", &author.id)).await.unwrap();

    let response = get(&app, "/catalog").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<strong>Books:</strong> 2"));
    assert!(response.body.contains("<strong>Authors:</strong> 1"));
}

#[tokio::test]
async fn test_non_alphanumeric_names_are_rejected() {
    let (app, store) = app();

    let response = post_form(
        &app,
        "/catalog/author/create",
        "first_name=Den%21s&family_name=DUPONT",
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("First name has non-alphanumeric characters."));
    assert!(response.body.contains("value=\"Den!s\""));

    let response = post_form(
        &app,
        "/catalog/author/create",
        "first_name=Denis&family_name=DU+PONT",
    )
    .await;
    assert!(response.body.contains("Family name has non-alphanumeric characters."));

    assert_eq!(store.count_authors().await.unwrap(), 0);
}

#[tokio::test]
async fn test_empty_name_reports_both_rules() {
    let (app, store) = app();

    let response = post_form(
        &app,
        "/catalog/author/create",
        "first_name=&family_name=DUPONT",
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("First name must not be empty."));
    assert!(response.body.contains("First name has non-alphanumeric characters."));
    assert!(!response.body.contains("Family name"));
    assert_eq!(store.count_authors().await.unwrap(), 0);
}

#[tokio::test]
async fn test_unparsable_dates_are_rejected() {
    let (app, store) = app();

    let response = post_form(
        &app,
        "/catalog/author/create",
        "first_name=Bob&family_name=Synclair&date_of_birth=12-12-1963&date_of_death=tomorrow",
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Invalid date of birth"));
    assert!(response.body.contains("Invalid date of death"));
    assert_eq!(store.count_authors().await.unwrap(), 0);
}

#[tokio::test]
async fn test_author_create_round_trip_returns_sanitized_values() {
    let (app, store) = app();

    let response = post_form(
        &app,
        "/catalog/author/create",
        "first_name=++Denis++&family_name=DUPONT&date_of_birth=1965-02-09&date_of_death=",
    )
    .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert!(response.location().starts_with("/catalog/author/"));

    let detail = get(&app, response.location()).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("DUPONT, Denis"));
    assert!(detail.body.contains("Feb 9, 1965"));

    let authors = store.list_authors().await.unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].first_name, "Denis");
    assert_eq!(authors[0].date_of_death, None);
}

#[tokio::test]
async fn test_book_create_round_trip_returns_escaped_values() {
    let (app, store) = app();
    let author = store.create_author(&author_input("Denis", "DUPONT")).await.unwrap();

    let body = format!(
        "title=++Tom+%26+Jerry+&author={}&summary=%3Cb%3Ecat%3C%2Fb%3E&isbn=111",
        author.id
    );
    let response = post_form(&app, "/catalog/book/create", &body).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let detail = get(&app, response.location()).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Title: Tom &amp; Jerry"));
    assert!(detail.body.contains("&lt;b&gt;cat&lt;&#x2F;b&gt;"));
    assert!(!detail.body.contains("&amp;amp;"));
    assert!(!detail.body.contains("<b>cat</b>"));
    assert!(detail.body.contains("DUPONT, Denis"));
}

#[tokio::test]
async fn test_book_create_form_lists_authors() {
    let (app, store) = app();
    let author = store.create_author(&author_input("BOB", "Synclair")).await.unwrap();

    let response = get(&app, "/catalog/book/create").await;
    assert_eq!(response.status, StatusCode::OK);
    let option = format!("<option value=\"{}\">Synclair, BOB</option>", author.id);
    assert!(response.body.contains(&option));

    let invalid = post_form(&app, "/catalog/book/create", "title=&author=&summary=s&isbn=i").await;
    assert_eq!(invalid.status, StatusCode::OK);
    assert!(invalid.body.contains("Title must not be empty."));
    assert!(invalid.body.contains("Author must not be empty."));
    assert!(invalid.body.contains("Synclair, BOB"));
    assert_eq!(store.count_books().await.unwrap(), 0);
}

#[tokio::test]
async fn test_lists_are_sorted_regardless_of_insertion_order() {
    let (app, store) = app();
    let zola = store.create_author(&author_input("Emile", "Zola")).await.unwrap();
    let adams = store.create_author(&author_input("Douglas", "Adams")).await.unwrap();
    store.create_author(&author_input("Victor", "Hugo")).await.unwrap();
    store.create_book(&book_input("Nana", &zola.id)).await.unwrap();
    store.create_book(&book_input("Germinal", &zola.id)).await.unwrap();
    store.create_book(&book_input("Mostly Harmless", &adams.id)).await.unwrap();

    let authors = get(&app, "/catalog/authors").await.body;
    let a = authors.find("Adams, Douglas").unwrap();
    let h = authors.find("Hugo, Victor").unwrap();
    let z = authors.find("Zola, Emile").unwrap();
    assert!(a < h && h < z);

    let books = get(&app, "/catalog/books").await.body;
    let g = books.find(">Germinal<").unwrap();
    let m = books.find(">Mostly Harmless<").unwrap();
    let n = books.find(">Nana<").unwrap();
    assert!(g < m && m < n);
    assert!(books.contains("Zola, Emile"));
}

#[tokio::test]
async fn test_author_with_books_cannot_be_deleted() {
    let (app, store) = app();
    let author = store.create_author(&author_input("BOB", "Synclair")).await.unwrap();
    let book = store.create_book(&book_input("Le JS en action", &author.id)).await.unwrap();
    let uri = format!("/catalog/author/{}/delete", author.id);

    let confirmation = get(&app, &uri).await;
    assert_eq!(confirmation.status, StatusCode::OK);
    assert!(confirmation.body.contains("Delete the following books"));

    for _ in 0..3 {
        let refused = post_form(&app, &uri, &format!("authorid={}", author.id)).await;
        assert_eq!(refused.status, StatusCode::OK);
        assert_eq!(refused.body, confirmation.body);
        assert!(refused.body.contains("Synclair, BOB"));
        assert!(refused.body.contains("Le JS en action"));
        assert!(store.find_author(&author.id).await.unwrap().is_some());
    }

    let removed = post_form(&app, &format!("/catalog/book/{}/delete", book.id), "").await;
    assert_eq!(removed.status, StatusCode::SEE_OTHER);
    assert_eq!(removed.location(), "/catalog/books");

    let deleted = post_form(&app, &uri, "").await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(deleted.location(), "/catalog/authors");
    assert!(store.find_author(&author.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleting_unknown_records_redirects_to_list() {
    let (app, _) = app();

    let response = get(&app, "/catalog/author/missing/delete").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), "/catalog/authors");

    let response = post_form(&app, "/catalog/author/missing/delete", "").await;
    assert_eq!(response.location(), "/catalog/authors");

    let response = get(&app, "/catalog/book/missing/delete").await;
    assert_eq!(response.location(), "/catalog/books");

    let response = post_form(&app, "/catalog/book/missing/delete", "").await;
    assert_eq!(response.location(), "/catalog/books");
}

#[tokio::test]
async fn test_missing_records_are_404() {
    let (app, _) = app();
    for uri in [
        "/catalog/author/missing",
        "/catalog/author/missing/update",
        "/catalog/book/missing",
        "/catalog/book/missing/update",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
        assert!(response.body.contains("not found"));
    }

    let response = post_form(
        &app,
        "/catalog/author/missing/update",
        "first_name=A&family_name=B",
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_author_update_replaces_record() {
    let (app, store) = app();
    let mut input = author_input("Bob", "Synclair");
    input.date_of_birth = chrono::NaiveDate::from_ymd_opt(1963, 12, 12);
    let author = store.create_author(&input).await.unwrap();
    let uri = format!("/catalog/author/{}/update", author.id);

    let form = get(&app, &uri).await;
    assert!(form.body.contains("value=\"1963-12-12\""));
    assert!(form.body.contains("Update Author"));

    let rejected = post_form(&app, &uri, "first_name=Bob%3F&family_name=Synclair").await;
    assert_eq!(rejected.status, StatusCode::OK);
    assert!(rejected.body.contains("First name has non-alphanumeric characters."));
    assert_eq!(store.find_author(&author.id).await.unwrap().unwrap().first_name, "Bob");

    let saved = post_form(&app, &uri, "first_name=Robert&family_name=Synclair").await;
    assert_eq!(saved.status, StatusCode::SEE_OTHER);
    assert_eq!(saved.location(), author.url());

    let updated = store.find_author(&author.id).await.unwrap().unwrap();
    assert_eq!(updated.first_name, "Robert");
    assert_eq!(updated.date_of_birth, None);
}

#[tokio::test]
async fn test_book_update_validation_failure_lists_authors() {
    let (app, store) = app();
    let dupont = store.create_author(&author_input("Denis", "DUPONT")).await.unwrap();
    let synclair = store.create_author(&author_input("BOB", "Synclair")).await.unwrap();
    let book = store.create_book(&book_input("Le CSS en action", &dupont.id)).await.unwrap();
    let uri = format!("/catalog/book/{}/update", book.id);

    let form = get(&app, &uri).await;
    assert!(form.body.contains(&format!("<option value=\"{}\" selected>", dupont.id)));

    let rejected = post_form(
        &app,
        &uri,
        &format!("title=&author={}&summary=s&isbn=", synclair.id),
    )
    .await;
    assert_eq!(rejected.status, StatusCode::OK);
    assert!(rejected.body.contains("Title must not be empty."));
    assert!(rejected.body.contains("ISBN must not be empty."));
    assert!(rejected.body.contains(&format!("<option value=\"{}\" selected>", synclair.id)));
    assert!(rejected.body.contains("DUPONT, Denis"));

    let saved = post_form(
        &app,
        &uri,
        &format!("title=Le+CSS+en+pratique&author={}&summary=s&isbn=1", synclair.id),
    )
    .await;
    assert_eq!(saved.status, StatusCode::SEE_OTHER);
    assert_eq!(saved.location(), book.url());
    let stored = store.find_book(&book.id).await.unwrap().unwrap();
    assert_eq!(stored.book.title, "Le CSS en pratique");
    assert_eq!(stored.author.unwrap().id, synclair.id);
}

#[tokio::test]
async fn test_store_failures_are_server_errors() {
    let app = app_with(Arc::new(FailingStore));

    for uri in ["/catalog", "/catalog/authors", "/catalog/books", "/catalog/book/x"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert!(!response.body.contains("store unavailable"));
    }

    let response = post_form(
        &app,
        "/catalog/author/create",
        "first_name=Denis&family_name=DUPONT",
    )
    .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let response = get(&app, "/ready").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}
