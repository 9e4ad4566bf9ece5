//! JSON book endpoint, health and OpenAPI

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use local_library::repository::EntityStore;
use serde_json::{json, Value};

use crate::common::{app, author_input, get, post_json, send};

#[tokio::test]
async fn test_api_book_reports_empty_author() {
    let (app, store) = app();

    let response = post_json(
        &app,
        "/catalog/api/book",
        json!({ "title": "T", "author": "", "summary": "S", "isbn": "I" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "Author must not be empty.");
    assert_eq!(errors[0]["path"], "author");
    assert_eq!(errors[0]["type"], "field");
    assert_eq!(errors[0]["location"], "body");
    assert_eq!(store.count_books().await.unwrap(), 0);
}

#[tokio::test]
async fn test_api_book_null_author_is_empty() {
    let (app, store) = app();

    let response = post_json(
        &app,
        "/catalog/api/book",
        json!({ "title": "T", "author": null, "summary": "S", "isbn": "I" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "Author must not be empty.");
    assert_eq!(errors[0]["value"], "");
    assert_eq!(store.count_books().await.unwrap(), 0);
}

#[tokio::test]
async fn test_api_book_accepts_scalar_values() {
    let (app, store) = app();
    let author = store.create_author(&author_input("Denis", "DUPONT")).await.unwrap();

    let response = post_json(
        &app,
        "/catalog/api/book",
        json!({ "title": "T", "author": author.id, "summary": "S", "isbn": 9781234 }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let books = store.list_books().await.unwrap();
    assert_eq!(books[0].book.isbn, "9781234");
}

#[tokio::test]
async fn test_api_book_without_json_content_type_reports_every_field() {
    let (app, _) = app();

    let request = Request::post("/catalog/api/book")
        .body(Body::from("title=T"))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["errors"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_api_book_malformed_json_is_json_400() {
    let (app, store) = app();

    let request = Request::post("/catalog/api/book")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].is_string());

    let response = post_json(&app, "/catalog/api/book", json!({ "title": ["T"] })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(store.count_books().await.unwrap(), 0);
}

#[tokio::test]
async fn test_api_book_missing_fields_are_empty() {
    let (app, _) = app();

    let response = post_json(&app, "/catalog/api/book", json!({ "title": "T" })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    let paths: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["author", "summary", "isbn"]);
}

#[tokio::test]
async fn test_api_book_created() {
    let (app, store) = app();
    let author = store.create_author(&author_input("Denis", "DUPONT")).await.unwrap();

    let response = post_json(
        &app,
        "/catalog/api/book",
        json!({ "title": "T", "author": author.id, "summary": "S", "isbn": "I" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    let url = body["url"].as_str().unwrap().to_string();
    assert_eq!(response.location(), url);
    assert_eq!(url, format!("/catalog/book/{}", body["id"].as_str().unwrap()));
    assert_eq!(body["title"], "T");

    let detail = get(&app, &url).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Title: T"));
    assert!(detail.body.contains("DUPONT, Denis"));
}

#[tokio::test]
async fn test_health_and_ready() {
    let (app, _) = app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "healthy");

    let response = get(&app, "/ready").await;
    assert_eq!(response.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = app();

    let response = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(response.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert!(body["paths"]["/catalog/api/book"]["post"].is_object());
}
