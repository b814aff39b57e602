//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use library_server::{api::create_router, AppConfig, AppState};

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

/// Send a request through a clone of the router and decode the JSON body (Null when empty)
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    };

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_book_crud() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({
            "title": "Clean Code",
            "author": "Robert C. Martin",
            "year": 2008,
            "genre": "Programming",
            "totalCopies": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["availableCopies"], 3);

    let (status, list) = send(&app, Method::GET, "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/books/1",
        Some(json!({ "id": 77, "title": "Clean Code, 2nd ed.", "totalCopies": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["title"], "Clean Code, 2nd ed.");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/books/99",
        Some(json!({ "title": "Ghost", "totalCopies": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/books/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, "/api/books/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");

    let (status, _) = send(&app, Method::DELETE, "/api/books/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // ids are not reused after a delete
    let (_, next) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "Refactoring", "totalCopies": 1 })),
    )
    .await;
    assert_eq!(next["id"], 2);
}

#[tokio::test]
async fn test_member_crud() {
    let app = app();

    let (status, alice) = send(
        &app,
        Method::POST,
        "/api/members",
        Some(json!({ "name": "Alice", "email": "alice@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(alice["id"], 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/members",
        Some(json!({ "name": "Mallory", "email": "not-an-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, fetched) = send(&app, Method::GET, "/api/members/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Alice");

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/members/1",
        Some(json!({ "name": "Alice B." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["email"], Value::Null);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/members/1",
        Some(json!({ "name": "Alice B.", "email": "broken" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/members/{id}"]["put"]["responses"]["400"].is_object());

    let (status, _) = send(&app, Method::DELETE, "/api/members/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&app, Method::GET, "/api/members", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_borrow_and_return_flow() {
    let app = app();

    let (_, book) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "Demo", "author": "Author", "year": 2026, "genre": "F", "totalCopies": 1 })),
    )
    .await;
    assert_eq!(book["availableCopies"], 1);
    let (_, bob) = send(&app, Method::POST, "/api/members", Some(json!({ "name": "Bob" }))).await;
    let (_, eve) = send(&app, Method::POST, "/api/members", Some(json!({ "name": "Eve" }))).await;

    // nested references
    let (status, record) = send(
        &app,
        Method::POST,
        "/api/borrow",
        Some(json!({ "book": { "id": book["id"] }, "member": { "id": bob["id"] } })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["id"], 1);
    assert_eq!(record["bookId"], book["id"]);
    assert_eq!(record["member"]["name"], "Bob");
    assert_eq!(record["book"]["availableCopies"], 0);
    assert_eq!(record["returnDate"], Value::Null);
    assert_eq!(record["status"], "active");

    let borrow_date: chrono::NaiveDate =
        serde_json::from_value(record["borrowDate"].clone()).expect("borrowDate");
    let due_date: chrono::NaiveDate =
        serde_json::from_value(record["dueDate"].clone()).expect("dueDate");
    assert_eq!(due_date - borrow_date, chrono::Duration::days(14));

    // flat ids, no copy left
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/borrow",
        Some(json!({ "bookId": book["id"], "memberId": eve["id"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "BookNotAvailable");

    let (status, returned) = send(&app, Method::PUT, "/api/return/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(returned["returnDate"].is_string());
    assert_eq!(returned["status"], "returned");

    let (_, fetched) = send(&app, Method::GET, "/api/books/1", None).await;
    assert_eq!(fetched["availableCopies"], 1);

    // returning twice is a no-op
    let (status, again) = send(&app, Method::PUT, "/api/return/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, send(&app, Method::GET, "/api/borrowing-records/1", None).await.1);
    let (_, fetched) = send(&app, Method::GET, "/api/books/1", None).await;
    assert_eq!(fetched["availableCopies"], 1);

    let (_, records) = send(&app, Method::GET, "/api/borrowing-records", None).await;
    assert_eq!(records.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_borrow_rejections() {
    let app = app();
    send(&app, Method::POST, "/api/books", Some(json!({ "title": "Solo", "totalCopies": 2 }))).await;
    send(&app, Method::POST, "/api/members", Some(json!({ "name": "Bob" }))).await;

    let (status, body) = send(&app, Method::POST, "/api/borrow", Some(json!({ "bookId": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MissingIdentification");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/borrow",
        Some(json!({ "book": {}, "member": { "id": 1 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/borrow",
        Some(json!({ "bookId": 5, "memberId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/borrow",
        Some(json!({ "bookId": 1, "memberId": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, book) = send(&app, Method::GET, "/api/books/1", None).await;
    assert_eq!(book["availableCopies"], 2);
    let (_, records) = send(&app, Method::GET, "/api/borrowing-records", None).await;
    assert_eq!(records, json!([]));

    let (status, _) = send(&app, Method::PUT, "/api/return/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::GET, "/api/borrowing-records/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app();
    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/borrow"].is_object());
}
