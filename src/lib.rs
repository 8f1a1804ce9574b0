pub mod catalog;
pub mod config;
pub mod db;
pub mod docs;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::catalog::MovieCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: MovieCatalog,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(routes::list_movies).post(routes::create_movie))
        // GET reads the segment as a genre name, PUT/DELETE as an id.
        .route(
            "/movies/{id}",
            get(routes::movies_by_genre).put(routes::update_movie).delete(routes::delete_movie),
        )
        .route("/genres", get(routes::list_genres))
        .route("/languages", get(routes::list_languages))
        .route("/docs", get(docs::swagger_ui))
        .route("/docs/openapi.json", get(docs::openapi_json))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
