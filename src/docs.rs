use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::{
    models::{
        CreateMovieRequest, ErrorMessage, GenreView, LanguageView, MovieView, UpdateMovieRequest,
    },
    routes,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Catalog API",
        description = "Create, list, filter by genre, update and delete movies."
    ),
    paths(
        routes::list_movies,
        routes::movies_by_genre,
        routes::create_movie,
        routes::update_movie,
        routes::delete_movie,
        routes::list_genres,
        routes::list_languages
    ),
    components(schemas(
        MovieView,
        GenreView,
        LanguageView,
        CreateMovieRequest,
        UpdateMovieRequest,
        ErrorMessage
    )),
    tags(
        (name = "movies", description = "Movie catalog"),
        (name = "reference", description = "Genres and languages a movie can reference")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

const SWAGGER_UI: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Movie Catalog API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: '/docs/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
"#;
