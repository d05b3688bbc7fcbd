//! Router tests driving the full application stack.

use crate::storage::Database;
use crate::{app, AppState};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = Database::in_memory().await.unwrap();
    app(AppState { db: Arc::new(db) })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, uri: &str, body: Value) -> i64 {
    let (status, resp) = send(app, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["message"], "created");
    resp["id"].as_i64().unwrap()
}

fn article(conference_id: i64, title: &str) -> Value {
    json!({
        "author_id": 3,
        "conference_id": conference_id,
        "title": title,
        "content": "We study things."
    })
}

#[tokio::test]
async fn test_create_then_get_user_by_id() {
    let app = test_app().await;

    let id = create(
        &app,
        "/users",
        json!({ "username": "ada", "email": "ada@example.org", "user_type": "reviewer" }),
    )
    .await;

    let (status, user) = send(&app, Method::GET, &format!("/user/id/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        user,
        json!({ "id": id, "username": "ada", "email": "ada@example.org", "user_type": "reviewer" })
    );
}

#[tokio::test]
async fn test_duplicate_email_is_server_error() {
    let app = test_app().await;
    let body = json!({ "username": "ada", "email": "ada@example.org", "user_type": "author" });

    create(&app, "/users", body.clone()).await;
    let (status, resp) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "username": "imposter", "email": "ada@example.org", "user_type": "author" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, json!({ "message": "server error" }));

    let (_, user) = send(&app, Method::GET, "/user/ada@example.org", None).await;
    assert_eq!(user["username"], "ada");

    let (status, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_user_type_is_server_error() {
    let app = test_app().await;

    let (status, resp) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "username": "root", "email": "root@example.org", "user_type": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, json!({ "message": "server error" }));
}

#[tokio::test]
async fn test_missing_user_is_null() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/user/id/41", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, "/user/ghost@example.org", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_article_roundtrip_applies_defaults() {
    let app = test_app().await;

    let id = create(&app, "/articles", article(8, "Ownership in Practice")).await;

    let (status, body) = send(&app, Method::GET, &format!("/article/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Ownership in Practice");
    assert_eq!(body["content"], "We study things.");
    assert_eq!(body["author_id"], 3);
    assert_eq!(body["conference_id"], 8);
    assert_eq!(body["version"], 1);
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn test_article_overrides_are_stored() {
    let app = test_app().await;

    let mut payload = article(8, "Second Draft");
    payload["version"] = json!(2);
    payload["status"] = json!("approved");
    let id = create(&app, "/articles", payload).await;

    let (_, body) = send(&app, Method::GET, &format!("/article/{}", id), None).await;
    assert_eq!(body["version"], 2);
    assert_eq!(body["status"], "approved");
}

#[tokio::test]
async fn test_article_without_title_fails() {
    let app = test_app().await;

    let (status, resp) = send(
        &app,
        Method::POST,
        "/articles",
        Some(json!({ "author_id": 3, "conference_id": 8, "content": "No title." })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, json!({ "message": "server error" }));

    let (_, listed) = send(&app, Method::GET, "/conference/8/articles", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_missing_article_is_null() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/article/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_malformed_article_id_is_server_error() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/article/abc", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal Server Error" }));
}

#[tokio::test]
async fn test_conference_articles_are_filtered() {
    let app = test_app().await;

    create(&app, "/articles", article(1, "first")).await;
    create(&app, "/articles", article(2, "elsewhere")).await;
    create(&app, "/articles", article(1, "second")).await;

    let (status, body) = send(&app, Method::GET, "/conference/1/articles", None).await;
    assert_eq!(status, StatusCode::OK);
    let articles = body.as_array().unwrap();
    assert_eq!(articles.len(), 2);
    assert!(articles.iter().all(|a| a["conference_id"] == 1));

    let (status, body) = send(&app, Method::GET, "/conference/77/articles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_conference() {
    let app = test_app().await;

    let keep = create(&app, "/conferences", json!({ "organizer_id": 1, "name": "Keep" })).await;
    let gone = create(&app, "/conferences", json!({ "organizer_id": 1, "name": "Drop" })).await;

    let (status, body) = send(&app, Method::DELETE, &format!("/conferences/{}", gone), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, "/conferences", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": keep, "organizer_id": 1, "name": "Keep" }]));

    let (status, body) = send(&app, Method::DELETE, &format!("/conferences/{}", gone), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Conference not found" }));
}

#[tokio::test]
async fn test_delete_absent_conference_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::DELETE, "/conferences/1234", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Conference not found");
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not Found" }));
}
