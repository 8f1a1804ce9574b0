#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use movie_catalog::{AppState, catalog::MovieCatalog, db, router};
use serde_json::{Value, json};
use tower::ServiceExt;

// Genre and language ids as seeded by the migration.
pub const ACTION: i32 = 1;
pub const COMEDY: i32 = 3;
pub const DRAMA: i32 = 5;
pub const SCIENCE_FICTION: i32 = 8;
pub const ENGLISH: i32 = 1;
pub const FRENCH: i32 = 2;
pub const PORTUGUESE: i32 = 5;

/// A fresh in-memory database with migrations applied. One connection only,
/// since every SQLite memory connection is its own database.
pub async fn test_catalog() -> MovieCatalog {
    let db = db::connect_and_migrate("sqlite::memory:", 1)
        .await
        .expect("in-memory database should migrate");
    MovieCatalog::new(db)
}

pub fn build_test_app(catalog: MovieCatalog) -> Router {
    router(Arc::new(AppState { catalog }))
}

pub async fn test_app() -> Router {
    build_test_app(test_catalog().await)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be JSON")
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("body should be UTF-8")
}

pub fn movie_body(title: &str, genre_id: i32, language_id: i32, release_date: &str) -> Value {
    json!({
        "title": title,
        "genre_id": genre_id,
        "language_id": language_id,
        "oscar_count": 0,
        "release_date": release_date,
    })
}

/// Creates a movie through the API and returns its id.
pub async fn create_movie(app: &Router, title: &str, genre_id: i32, language_id: i32) -> i64 {
    let response =
        post_json(app, "/movies", movie_body(title, genre_id, language_id, "2000-01-01")).await;
    assert_eq!(response.status(), StatusCode::CREATED, "creating {title}");

    list_movies(app)
        .await
        .into_iter()
        .find(|m| m["title"] == title)
        .and_then(|m| m["id"].as_i64())
        .expect("created movie should be listed")
}

pub async fn list_movies(app: &Router) -> Vec<Value> {
    let response = get(app, "/movies").await;
    assert_eq!(response.status(), StatusCode::OK);
    match body_json(response).await {
        Value::Array(movies) => movies,
        other => panic!("expected a JSON array, got {other}"),
    }
}

pub fn titles(movies: &[Value]) -> Vec<&str> {
    movies.iter().map(|m| m["title"].as_str().unwrap()).collect()
}
