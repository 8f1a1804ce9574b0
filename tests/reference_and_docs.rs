//! Tests for the genre/language listings and the documentation endpoints.

mod common;

use axum::http::{StatusCode, header::CONTENT_TYPE};
use common::*;

#[tokio::test]
async fn genres_are_seeded_and_sorted_by_name() {
    let app = test_app().await;

    let response = get(&app, "/genres").await;
    assert_eq!(response.status(), StatusCode::OK);

    let genres = body_json(response).await;
    let names: Vec<&str> =
        genres.as_array().unwrap().iter().map(|g| g["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        [
            "Action",
            "Animation",
            "Comedy",
            "Documentary",
            "Drama",
            "Horror",
            "Romance",
            "Science Fiction",
            "Thriller"
        ]
    );
    assert_eq!(genres[2]["id"], COMEDY);
}

#[tokio::test]
async fn languages_are_seeded_and_sorted_by_name() {
    let app = test_app().await;

    let response = get(&app, "/languages").await;
    assert_eq!(response.status(), StatusCode::OK);

    let languages = body_json(response).await;
    let names: Vec<&str> =
        languages.as_array().unwrap().iter().map(|l| l["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["English", "French", "German", "Japanese", "Portuguese", "Spanish"]);
    assert_eq!(languages[4]["id"], PORTUGUESE);
}

#[tokio::test]
async fn genre_listing_failure_returns_message() {
    let catalog = test_catalog().await;
    let db = catalog.db().clone();
    let app = build_test_app(catalog);

    db.close().await.unwrap();

    let response = get(&app, "/genres").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], "Falha ao buscar gêneros");
}

#[tokio::test]
async fn language_listing_failure_returns_message() {
    let catalog = test_catalog().await;
    let db = catalog.db().clone();
    let app = build_test_app(catalog);

    db.close().await.unwrap();

    let response = get(&app, "/languages").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], "Falha ao buscar idiomas");
}

#[tokio::test]
async fn docs_page_serves_swagger_ui() {
    let app = test_app().await;

    let response = get(&app, "/docs").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[CONTENT_TYPE].to_str().unwrap().starts_with("text/html"),
        "docs should be HTML"
    );

    let html = body_text(response).await;
    assert!(html.contains("swagger-ui"));
    assert!(html.contains("/docs/openapi.json"));
}

#[tokio::test]
async fn openapi_document_describes_movie_routes() {
    let app = test_app().await;

    let response = get(&app, "/docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert_eq!(doc["info"]["title"], "Movie Catalog API");

    let paths = &doc["paths"];
    assert!(paths["/movies"]["get"].is_object());
    assert!(paths["/movies"]["post"].is_object());
    assert!(paths["/genres"]["get"].is_object());

    // Genre filter and id routes share one template, so the document stays valid.
    let by_id = &paths["/movies/{id}"];
    for method in ["get", "put", "delete"] {
        assert_eq!(by_id[method]["parameters"][0]["name"], "id", "{method}");
    }
    assert!(paths.get("/movies/{genre}").is_none());

    let schemas = &doc["components"]["schemas"];
    assert!(schemas["MovieView"].is_object());
    assert!(schemas["CreateMovieRequest"].is_object());
    assert!(schemas["ErrorMessage"].is_object());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_app().await;
    assert_eq!(get(&app, "/films").await.status(), StatusCode::NOT_FOUND);
}
